mod app;
mod components;

const MOUNT_ID: &str = "app";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    mount = MOUNT_ID,
    version = env!("CARGO_PKG_VERSION"),
    "starting Fourfold frontend"
  );

  let root = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.get_element_by_id(MOUNT_ID)
    })
    .expect("missing #app mount element");

  yew::Renderer::<app::App>::with_root(root)
    .render();
}
