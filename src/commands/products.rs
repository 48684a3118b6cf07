use rust_decimal::Decimal;
use uuid::Uuid;

use crate::db::{keys, Repository};
use crate::errors::{Result, ValidationError};
use crate::models::{CatalogEntry, NewCatalogEntry};

/// Load the product catalog. An unreadable or malformed stored list falls
/// back to empty rather than blocking the page.
pub fn get_products(repo: &impl Repository) -> Vec<CatalogEntry> {
    repo.get_or_default(keys::PRODUCTS)
}

fn validate(input: &NewCatalogEntry) -> std::result::Result<Decimal, ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }
    if input.description.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "description",
        });
    }

    let price = input
        .price
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidNumber { field: "price" })?;
    if price.is_sign_negative() {
        return Err(ValidationError::InvalidNumber { field: "price" });
    }

    Ok(price)
}

pub fn create_product(repo: &impl Repository, input: NewCatalogEntry) -> Result<CatalogEntry> {
    let price = validate(&input)?;

    let entry = CatalogEntry {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        description: input.description,
        price,
        image: None,
    };

    let mut products = get_products(repo);
    products.push(entry.clone());
    repo.set(keys::PRODUCTS, &products)?;

    Ok(entry)
}

pub fn update_product(
    repo: &impl Repository,
    id: &str,
    input: NewCatalogEntry,
) -> Result<CatalogEntry> {
    let price = validate(&input)?;

    let mut products = get_products(repo);
    let entry = products
        .iter_mut()
        .find(|entry| entry.id == id)
        .ok_or(ValidationError::NotFound { what: "product" })?;

    entry.name = input.name;
    entry.description = input.description;
    entry.price = price;
    let updated = entry.clone();

    repo.set(keys::PRODUCTS, &products)?;

    Ok(updated)
}

/// Delete a product. No-op when the id is absent; the write is still a full
/// replacement of the stored list.
pub fn delete_product(repo: &impl Repository, id: &str) -> Result<()> {
    let mut products = get_products(repo);
    products.retain(|entry| entry.id != id);
    repo.set(keys::PRODUCTS, &products)?;

    Ok(())
}
