//! The route URIs for pages and form submissions.
//!
//! For routes that take a parameter, e.g., '/products/{product_id}', use [format_endpoint].

/// The root route which redirects to the products page.
pub const ROOT: &str = "/";
/// The page listing every product.
pub const PRODUCTS_VIEW: &str = "/products";
/// The page for creating a new product.
pub const NEW_PRODUCT_VIEW: &str = "/products/new";
/// The page for a single product.
pub const PRODUCT_VIEW: &str = "/products/{product_id}";
/// The page listing every category.
pub const CATEGORIES_VIEW: &str = "/categories";
/// The page for creating a new category.
pub const NEW_CATEGORY_VIEW: &str = "/categories/new";
/// The page for a single category and its products.
pub const CATEGORY_VIEW: &str = "/categories/{category_id}";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a product.
pub const POST_PRODUCT: &str = "/api/products";
/// The route to create a category.
pub const POST_CATEGORY: &str = "/api/categories";

/// Replace the first `{parameter}` in `endpoint_path` with `id`.
///
/// If `endpoint_path` has no parameter, it is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{id}{}",
        &endpoint_path[..param_start],
        &endpoint_path[param_end..]
    )
}
