pub mod dto;
pub mod forms;
pub mod handlers;

pub use handlers::{
    create_profile, health, load_all_profiles, load_profile, search_skill, update_profile,
};
