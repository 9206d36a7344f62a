mod card;
mod profile_form_card;
mod submitted_summary;
mod task_card;
mod timer_card;
mod vanish_card;

pub use card::Card;
pub use profile_form_card::ProfileFormCard;
pub use submitted_summary::SubmittedSummary;
pub use task_card::TaskCard;
pub use timer_card::TimerCard;
pub use vanish_card::VanishCard;
