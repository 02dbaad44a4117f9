//! Factory functions for marketplace API response bodies.
//!
//! Bodies are built as `serde_json::Value` in the marketplace's wire format so
//! tests exercise the same deserialization path as production responses.

use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::constant::{TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN};

/// Create a seller record with every field populated.
///
/// # Arguments
/// - `id` - Marketplace ID (`_id`) of the seller
/// - `name` - Display name of the seller
pub fn mock_seller(id: &str, name: &str) -> Value {
    let created_at = Utc::now() - Duration::days(30);

    json!({
        "_id": id,
        "name": name,
        "email": format!("{}@example.com", id),
        "username": id,
        "phone": "555-0100",
        "avatar": { "public_id": format!("avatar-{}", id), "url": "" },
        "address": {
            "street": "1 Orchard Road",
            "city": "Fresno",
            "state": "CA",
            "zipCode": "93650"
        },
        "verificationInfo": { "verified": true, "token": "" },
        "credit": null,
        "role": "seller",
        "fine": 0,
        "uniqueId": format!("SEL-{}", id),
        "createdAt": created_at.to_rfc3339(),
        "updatedAt": created_at.to_rfc3339()
    })
}

/// Create `count` sellers with IDs `s{offset + 1}`..=`s{offset + count}`.
pub fn mock_sellers(offset: usize, count: usize) -> Vec<Value> {
    (offset + 1..=offset + count)
        .map(|n| mock_seller(&format!("s{}", n), &format!("Seller {}", n)))
        .collect()
}

/// Create the body of a successful `GET /admin/sellers` response.
pub fn mock_seller_page(sellers: Vec<Value>, total: u64, page: u32, limit: u32) -> Value {
    json!({
        "success": true,
        "data": {
            "sellers": sellers,
            "total": total,
            "page": page,
            "limit": limit
        }
    })
}

/// Create a revenue row for the given farm and product names.
pub fn mock_revenue(farm_name: &str, product_name: &str, admin_revenue: f64) -> Value {
    json!({
        "farm": { "_id": format!("farm-{}", farm_name.to_lowercase().replace(' ', "-")), "name": farm_name },
        "product": { "_id": format!("product-{}", product_name.to_lowercase().replace(' ', "-")), "name": product_name },
        "adminRevenue": admin_revenue
    })
}

/// Create a `pagination` object; `total_page` is omitted when `None`.
pub fn mock_pagination(total: u64, page: u32, limit: u32, total_page: Option<u32>) -> Value {
    let mut pagination = json!({ "total": total, "page": page, "limit": limit });

    if let Some(total_page) = total_page {
        pagination["totalPage"] = json!(total_page);
    }

    pagination
}

/// Create the body of a successful `GET /admin/admin-reveneu` response.
pub fn mock_revenue_page(rows: Vec<Value>, pagination: Option<Value>) -> Value {
    let mut body = json!({ "success": true, "data": rows });

    if let Some(pagination) = pagination {
        body["pagination"] = pagination;
    }

    body
}

/// Create the body of a successful `POST /auth/login` response.
///
/// Tokens are always [`TEST_ACCESS_TOKEN`] and [`TEST_REFRESH_TOKEN`]; `farm` is
/// omitted from the nested user object when `None`.
pub fn mock_login_success(user_id: &str, role: &str, farm: Option<&str>) -> Value {
    let mut user = json!({ "name": "Test Admin", "email": "admin@example.com" });

    if let Some(farm) = farm {
        user["farm"] = json!(farm);
    }

    json!({
        "success": true,
        "message": "Login successful",
        "data": {
            "_id": user_id,
            "data": {
                "role": role,
                "user": user,
                "accessToken": TEST_ACCESS_TOKEN,
                "refreshToken": TEST_REFRESH_TOKEN
            }
        }
    })
}

/// Create the body of a rejected login, with or without a message.
pub fn mock_login_failure(message: Option<&str>) -> Value {
    match message {
        Some(message) => json!({ "success": false, "message": message }),
        None => json!({ "success": false }),
    }
}
