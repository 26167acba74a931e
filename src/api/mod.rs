//! Внешнее представление результатов раздачи.
//!
//! - DTO (dto.rs) — сериализуемый отчёт о шоудауне.

pub mod dto;

pub use dto::*;
