mod action_button;
mod back;
mod loading;
mod option_group;
mod step_counter;
mod step_image;

pub use action_button::ActionButton;
pub use back::Back;
pub use loading::LoadingSpinner;
pub use option_group::OptionGroup;
pub use step_counter::StepCounter;
pub use step_image::StepImage;
