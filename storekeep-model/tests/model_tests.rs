use pretty_assertions::assert_eq;
use serde_json::json;
use storekeep_model::{
    Address, Category, CategoryInput, Product, PublicUser, Ratings, User, UserInput,
};

fn sample_category() -> Category {
    Category {
        id: "cat-1".to_string(),
        name: "Audio".to_string(),
        description: "Headphones and speakers".to_string(),
        parent_category_id: None,
        icon: Some("audio.svg".to_string()),
        meta_title: None,
        meta_description: None,
        meta_keywords: vec!["audio".to_string()],
        is_active: true,
        is_visible: true,
        slug: "audio".to_string(),
        order: 1,
        created_at: 1000,
        updated_at: 1000,
    }
}

// ── Wire format ──────────────────────────────────────────────────

#[test]
fn category_serializes_camel_case() {
    let doc = serde_json::to_value(sample_category()).unwrap();
    assert_eq!(doc["parentCategoryId"], json!(null));
    assert_eq!(doc["isActive"], json!(true));
    assert_eq!(doc["isVisible"], json!(true));
    assert_eq!(doc["metaKeywords"], json!(["audio"]));
    assert_eq!(doc["createdAt"], json!(1000));
}

#[test]
fn category_absent_optionals_are_omitted() {
    let mut category = sample_category();
    category.icon = None;
    let doc = serde_json::to_value(category).unwrap();
    assert!(doc.get("icon").is_none());
    assert!(doc.get("metaTitle").is_none());
}

#[test]
fn category_roundtrip() {
    let original = sample_category();
    let doc = serde_json::to_value(&original).unwrap();
    let parsed: Category = serde_json::from_value(doc).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn category_deserializes_from_known_json() {
    let doc = json!({
        "id": "abc",
        "name": "Toys",
        "description": "For kids",
        "slug": "toys",
        "isActive": false,
        "isVisible": true,
        "order": 3,
        "createdAt": 1,
        "updatedAt": 2
    });
    let category: Category = serde_json::from_value(doc).unwrap();
    assert_eq!(category.parent_category_id, None);
    assert_eq!(category.meta_keywords, Vec::<String>::new());
    assert!(!category.is_active);
}

#[test]
fn product_defaults_apply_on_missing_fields() {
    let doc = json!({
        "id": "p1",
        "name": "Widget",
        "description": "A widget",
        "price": 9.99,
        "categoryId": "cat-1",
        "stock": 5,
        "isActive": true,
        "order": 1,
        "createdAt": 1,
        "updatedAt": 1
    });
    let product: Product = serde_json::from_value(doc).unwrap();
    assert_eq!(product.images, Vec::<String>::new());
    assert_eq!(product.low_stock_threshold, 0);
    assert_eq!(product.brand, None);
    assert_eq!(product.ratings, Ratings::default());
}

#[test]
fn ratings_default_is_zeroed() {
    let ratings = Ratings::default();
    assert_eq!(ratings.rating, 0.0);
    assert_eq!(ratings.num_of_reviews, 0);
}

#[test]
fn ratings_uses_num_of_reviews_key() {
    let doc = serde_json::to_value(Ratings {
        rating: 4.5,
        num_of_reviews: 12,
    })
    .unwrap();
    assert_eq!(doc, json!({"rating": 4.5, "numOfReviews": 12}));
}

// ── Users ────────────────────────────────────────────────────────

fn sample_user() -> User {
    User {
        id: "u1".to_string(),
        email: "ann@example.com".to_string(),
        password: "$2b$10$hash".to_string(),
        name: "Ann".to_string(),
        address: Some(Address {
            street: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            postal_code: Some("12345".to_string()),
            country: Some("US".to_string()),
        }),
        created_at: 1,
        updated_at: 2,
    }
}

#[test]
fn user_roundtrips_with_address() {
    let original = sample_user();
    let doc = serde_json::to_value(&original).unwrap();
    assert_eq!(doc["address"]["postalCode"], json!("12345"));
    let parsed: User = serde_json::from_value(doc).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn public_user_drops_password() {
    let public = PublicUser::from(sample_user());
    let doc = serde_json::to_value(&public).unwrap();
    assert!(doc.get("password").is_none());
    assert_eq!(doc["email"], json!("ann@example.com"));
}

// ── Inputs ───────────────────────────────────────────────────────

#[test]
fn input_tolerates_missing_fields() {
    let input: CategoryInput = serde_json::from_value(json!({"name": "Toys"})).unwrap();
    assert_eq!(input.name.as_deref(), Some("Toys"));
    assert_eq!(input.slug, None);
    assert_eq!(input.is_active, None);
}

#[test]
fn input_rejects_mistyped_boolean() {
    let result: Result<CategoryInput, _> =
        serde_json::from_value(json!({"name": "Toys", "isActive": "yes"}));
    assert!(result.is_err());
}

#[test]
fn user_input_parses_address() {
    let input: UserInput = serde_json::from_value(json!({
        "name": "Ann",
        "email": "ann@x.com",
        "password": "pw",
        "address": {"city": "Springfield"}
    }))
    .unwrap();
    let address = input.address.unwrap();
    assert_eq!(address.city.as_deref(), Some("Springfield"));
    assert_eq!(address.street, None);
}
