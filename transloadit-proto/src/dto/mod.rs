mod assembly_dto;
mod assembly_params_dto;
mod bored_dto;

pub use assembly_dto::*;
pub use assembly_params_dto::*;
pub use bored_dto::*;
