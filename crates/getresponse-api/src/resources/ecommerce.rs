// E-commerce endpoints
//
// Shops and everything scoped under them (categories, orders, carts,
// meta-fields, products, variants, taxes), plus the account-level address
// book used by orders.

use percent_encoding::utf8_percent_encode;
use serde::Serialize;
use serde_json::json;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::{COMPONENT, Query};
use crate::response::ApiResponse;

/// Append `?additionalFlags=<flags>` to an order path when flags are given.
///
/// `skipAutomation` stops the order from triggering "Make a purchase"
/// automation elements.
fn with_additional_flags(mut path: String, flags: Option<&str>) -> String {
    if let Some(flags) = flags.filter(|f| !f.is_empty()) {
        path.push_str("?additionalFlags=");
        path.extend(utf8_percent_encode(flags, COMPONENT));
    }
    path
}

impl Client {
    // ── Shops ────────────────────────────────────────────────────────

    /// `GET shops/`
    pub async fn get_shops(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("shops", query).await
    }

    /// `GET shops/{shopId}/?fields=...`
    pub async fn get_shop(&self, shop_id: &str, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get(&format!("shops/{shop_id}"), fields(field_names))
            .await
    }

    /// `POST shops`
    pub async fn create_shop(&self, shop: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post("shops", shop).await
    }

    /// `POST shops/{shopId}`
    pub async fn update_shop(&self, shop_id: &str, shop: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}"), shop).await
    }

    /// `DELETE shops/{shopId}/`
    pub async fn delete_shop(&self, shop_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("shops/{shop_id}"), Query::None).await
    }

    // ── Categories ───────────────────────────────────────────────────

    /// `GET shops/{shopId}/categories/`
    pub async fn get_categories(
        &self,
        shop_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("shops/{shop_id}/categories"), query).await
    }

    /// `GET shops/{shopId}/categories/{categoryId}/?fields=...`
    pub async fn get_category(
        &self,
        shop_id: &str,
        category_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("shops/{shop_id}/categories/{category_id}"),
            fields(field_names),
        )
        .await
    }

    /// `POST shops/{shopId}/categories`
    pub async fn create_category(
        &self,
        shop_id: &str,
        category: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}/categories"), category)
            .await
    }

    /// `POST shops/{shopId}/categories/{categoryId}`
    pub async fn update_category(
        &self,
        shop_id: &str,
        category_id: &str,
        category: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("shops/{shop_id}/categories/{category_id}"),
            category,
        )
        .await
    }

    /// `DELETE shops/{shopId}/categories/{categoryId}/`
    pub async fn delete_category(&self, shop_id: &str, category_id: &str) -> Result<ApiResponse, Error> {
        self.remove(
            &format!("shops/{shop_id}/categories/{category_id}"),
            Query::None,
        )
        .await
    }

    // ── Addresses ────────────────────────────────────────────────────

    /// `GET addresses/`
    pub async fn get_addresses(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("addresses", query).await
    }

    /// `GET addresses/{addressId}/?fields=...`
    pub async fn get_address(&self, address_id: &str, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get(&format!("addresses/{address_id}"), fields(field_names))
            .await
    }

    /// `POST addresses`
    pub async fn create_address(&self, address: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post("addresses", address).await
    }

    /// `POST addresses/{addressId}`
    pub async fn update_address(
        &self,
        address_id: &str,
        address: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("addresses/{address_id}"), address).await
    }

    /// `DELETE addresses/{addressId}/`
    pub async fn delete_address(&self, address_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("addresses/{address_id}"), Query::None)
            .await
    }

    // ── Orders ───────────────────────────────────────────────────────

    /// `GET shops/{shopId}/orders/`
    pub async fn get_orders(&self, shop_id: &str, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get(&format!("shops/{shop_id}/orders"), query).await
    }

    /// `GET shops/{shopId}/orders/{orderId}/?fields=...`
    pub async fn get_order(
        &self,
        shop_id: &str,
        order_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("shops/{shop_id}/orders/{order_id}"),
            fields(field_names),
        )
        .await
    }

    /// `POST shops/{shopId}/orders/[?additionalFlags=...]`
    pub async fn create_order(
        &self,
        shop_id: &str,
        order: &impl Serialize,
        additional_flags: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let path = with_additional_flags(format!("shops/{shop_id}/orders/"), additional_flags);
        self.post(&path, order).await
    }

    /// `POST shops/{shopId}/orders/{orderId}[?additionalFlags=...]`
    pub async fn update_order(
        &self,
        shop_id: &str,
        order_id: &str,
        order: &impl Serialize,
        additional_flags: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let path = with_additional_flags(
            format!("shops/{shop_id}/orders/{order_id}"),
            additional_flags,
        );
        self.post(&path, order).await
    }

    /// `DELETE shops/{shopId}/orders/{orderId}/`
    pub async fn delete_order(&self, shop_id: &str, order_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("shops/{shop_id}/orders/{order_id}"), Query::None)
            .await
    }

    // ── Carts ────────────────────────────────────────────────────────

    /// `GET shops/{shopId}/carts/`
    pub async fn get_carts(&self, shop_id: &str, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get(&format!("shops/{shop_id}/carts"), query).await
    }

    /// `GET shops/{shopId}/carts/{cartId}/?fields=...`
    pub async fn get_cart(
        &self,
        shop_id: &str,
        cart_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("shops/{shop_id}/carts/{cart_id}"),
            fields(field_names),
        )
        .await
    }

    /// `POST shops/{shopId}/carts`
    pub async fn create_cart(&self, shop_id: &str, cart: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}/carts"), cart).await
    }

    /// `POST shops/{shopId}/carts/{cartId}`
    pub async fn update_cart(
        &self,
        shop_id: &str,
        cart_id: &str,
        cart: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}/carts/{cart_id}"), cart)
            .await
    }

    /// `DELETE shops/{shopId}/carts/{cartId}/`
    pub async fn delete_cart(&self, shop_id: &str, cart_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("shops/{shop_id}/carts/{cart_id}"), Query::None)
            .await
    }

    // ── Meta-fields ──────────────────────────────────────────────────

    /// `GET shops/{shopId}/meta-fields/`
    pub async fn get_meta_fields(
        &self,
        shop_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("shops/{shop_id}/meta-fields"), query).await
    }

    /// `GET shops/{shopId}/meta-fields/{metaFieldId}/?fields=...`
    pub async fn get_meta_field(
        &self,
        shop_id: &str,
        meta_field_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("shops/{shop_id}/meta-fields/{meta_field_id}"),
            fields(field_names),
        )
        .await
    }

    /// `POST shops/{shopId}/meta-fields`
    pub async fn create_meta_field(
        &self,
        shop_id: &str,
        meta_field: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}/meta-fields"), meta_field)
            .await
    }

    /// `POST shops/{shopId}/meta-fields/{metaFieldId}`
    pub async fn update_meta_field(
        &self,
        shop_id: &str,
        meta_field_id: &str,
        meta_field: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("shops/{shop_id}/meta-fields/{meta_field_id}"),
            meta_field,
        )
        .await
    }

    /// `DELETE shops/{shopId}/meta-fields/{metaFieldId}/`
    pub async fn delete_meta_field(
        &self,
        shop_id: &str,
        meta_field_id: &str,
    ) -> Result<ApiResponse, Error> {
        self.remove(
            &format!("shops/{shop_id}/meta-fields/{meta_field_id}"),
            Query::None,
        )
        .await
    }

    // ── Products ─────────────────────────────────────────────────────

    /// `GET shops/{shopId}/products/`
    pub async fn get_products(
        &self,
        shop_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("shops/{shop_id}/products"), query).await
    }

    /// `GET shops/{shopId}/products/{productId}/?fields=...`
    pub async fn get_product(
        &self,
        shop_id: &str,
        product_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("shops/{shop_id}/products/{product_id}"),
            fields(field_names),
        )
        .await
    }

    /// `POST shops/{shopId}/products`
    pub async fn create_product(
        &self,
        shop_id: &str,
        product: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}/products"), product).await
    }

    /// `POST shops/{shopId}/products/{productId}`
    pub async fn update_product(
        &self,
        shop_id: &str,
        product_id: &str,
        product: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}/products/{product_id}"), product)
            .await
    }

    /// Upsert a product's categories.
    ///
    /// `POST shops/{shopId}/products/{productId}` with `{"categories": [...]}`
    pub async fn update_product_categories(
        &self,
        shop_id: &str,
        product_id: &str,
        categories: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("shops/{shop_id}/products/{product_id}"),
            &json!({ "categories": categories }),
        )
        .await
    }

    /// Upsert a product's meta-fields.
    ///
    /// `POST shops/{shopId}/products/{productId}` with `{"metaFields": [...]}`
    pub async fn update_product_meta_fields(
        &self,
        shop_id: &str,
        product_id: &str,
        meta_fields: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("shops/{shop_id}/products/{product_id}"),
            &json!({ "metaFields": meta_fields }),
        )
        .await
    }

    /// `DELETE shops/{shopId}/products/{productId}/`
    pub async fn delete_product(&self, shop_id: &str, product_id: &str) -> Result<ApiResponse, Error> {
        self.remove(
            &format!("shops/{shop_id}/products/{product_id}"),
            Query::None,
        )
        .await
    }

    // ── Product variants ─────────────────────────────────────────────

    /// `GET shops/{shopId}/products/{productId}/variants/`
    pub async fn get_product_variants(
        &self,
        shop_id: &str,
        product_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("shops/{shop_id}/products/{product_id}/variants"),
            query,
        )
        .await
    }

    /// `GET shops/{shopId}/products/{productId}/variants/{variantId}/?fields=...`
    pub async fn get_product_variant(
        &self,
        shop_id: &str,
        product_id: &str,
        variant_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("shops/{shop_id}/products/{product_id}/variants/{variant_id}"),
            fields(field_names),
        )
        .await
    }

    /// `POST shops/{shopId}/products/{productId}/variants`
    pub async fn create_product_variant(
        &self,
        shop_id: &str,
        product_id: &str,
        variant: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("shops/{shop_id}/products/{product_id}/variants"),
            variant,
        )
        .await
    }

    /// `POST shops/{shopId}/products/{productId}/variants/{variantId}`
    pub async fn update_product_variant(
        &self,
        shop_id: &str,
        product_id: &str,
        variant_id: &str,
        variant: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("shops/{shop_id}/products/{product_id}/variants/{variant_id}"),
            variant,
        )
        .await
    }

    /// `DELETE shops/{shopId}/products/{productId}/variants/{variantId}/`
    pub async fn delete_product_variant(
        &self,
        shop_id: &str,
        product_id: &str,
        variant_id: &str,
    ) -> Result<ApiResponse, Error> {
        self.remove(
            &format!("shops/{shop_id}/products/{product_id}/variants/{variant_id}"),
            Query::None,
        )
        .await
    }

    // ── Taxes ────────────────────────────────────────────────────────

    /// `GET shops/{shopId}/taxes/`
    pub async fn get_taxes(&self, shop_id: &str, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get(&format!("shops/{shop_id}/taxes"), query).await
    }

    /// `GET shops/{shopId}/taxes/{taxId}/?fields=...`
    pub async fn get_tax(
        &self,
        shop_id: &str,
        tax_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("shops/{shop_id}/taxes/{tax_id}"),
            fields(field_names),
        )
        .await
    }

    /// `POST shops/{shopId}/taxes`
    pub async fn create_tax(&self, shop_id: &str, tax: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}/taxes"), tax).await
    }

    /// `POST shops/{shopId}/taxes/{taxId}`
    pub async fn update_tax(
        &self,
        shop_id: &str,
        tax_id: &str,
        tax: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("shops/{shop_id}/taxes/{tax_id}"), tax)
            .await
    }

    /// `DELETE shops/{shopId}/taxes/{taxId}/`
    pub async fn delete_tax(&self, shop_id: &str, tax_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("shops/{shop_id}/taxes/{tax_id}"), Query::None)
            .await
    }
}
