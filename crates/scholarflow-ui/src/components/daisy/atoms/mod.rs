pub(crate) mod badge;
pub(crate) mod button;
pub(crate) mod progress;
pub(crate) mod switch;

pub(crate) use badge::Badge;
pub(crate) use button::Button;
pub(crate) use progress::Progress;
pub(crate) use switch::Switch;
