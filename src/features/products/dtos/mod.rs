pub mod product_dto;

pub use product_dto::{
    AdminProductQueryParams, CreateProductDto, ProductResponseDto, UpdateProductDto,
};
