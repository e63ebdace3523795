pub mod category_dto;

pub use category_dto::{
    AdminCategoryDto, CategoryResponseDto, CreateCategoryDto, SlugPreviewDto, SlugPreviewQuery,
    UpdateCategoryDto,
};
