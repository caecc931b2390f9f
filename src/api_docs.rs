use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::greeting::hello,
        api::products::list_products,
        api::products::get_product,
        api::products::create_product,
        api::purchase::buy,
        api::transactions::list_transactions,
    ),
    components(
        schemas(
            crate::domain::Product,
            crate::domain::TransactionEntry,
            crate::domain::NewProductForm,
            crate::domain::FieldError,
            crate::services::PurchaseReceipt,
        )
    ),
    tags(
        (name = "storefront", description = "Storefront API")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_purchase_route() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/buy/{id}"));
        assert!(doc.paths.paths.contains_key("/api/admin/products"));
    }
}
