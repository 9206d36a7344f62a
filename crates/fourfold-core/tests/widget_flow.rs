use fourfold_core::{TaskComposer, Visibility};

#[test]
fn hidden_label_stays_hidden() {
    let mut label = Visibility::default();
    assert!(label.is_visible());

    label.hide();
    for _ in 0..10 {
        label.hide();
        assert!(!label.is_visible());
    }
}

#[test]
fn task_input_only_clears_when_a_task_is_added() {
    let inputs = ["", "   ", "first", "\t second \n", " ", "first", "  x  y  "];
    let mut composer = TaskComposer::default();
    let mut expected: Vec<String> = Vec::new();

    for input in inputs {
        composer.set_input(input);
        let before = composer.tasks.len();
        let added = composer.submit();
        let trimmed = input.trim();

        if trimmed.is_empty() {
            assert!(!added);
            assert_eq!(composer.tasks.len(), before);
            assert_eq!(composer.input, input);
        } else {
            assert!(added);
            expected.push(trimmed.to_string());
            assert_eq!(composer.tasks.len(), before + 1);
            assert_eq!(composer.input, "");
        }
    }

    assert_eq!(composer.tasks.iter().collect::<Vec<_>>(), expected);
    assert_eq!(expected, vec!["first", "second", "first", "x  y"]);
}
