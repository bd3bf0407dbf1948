//! Assembly of hypermedia documents from domain values.
//!
//! Each function is pure: it takes domain values plus the service's public
//! [`LinkBase`] and returns a wire document. HAL representations embed
//! related resources under `_embedded`; JSON:API documents carry typed
//! `relationships` and side-load referenced resources via `included`.
//!
//! Line items are not independently addressable, so their JSON:API resource
//! objects use the synthetic id `{order_id}-{line_number}` and carry no
//! `self` link.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Catalogue, Customer, DomainError, Order, OrderItem, OrderStatus, Product};
use hypermedia::{Document, HalResource, LinkBase, Relation, Relationship, ResourceIdentifier, ResourceObject};

/// JSON:API resource type names.
mod kind {
    pub const ORDERS: &str = "orders";
    pub const ORDER_ITEMS: &str = "order-items";
    pub const PRODUCTS: &str = "products";
    pub const CUSTOMERS: &str = "customers";
}

/// Resource paths, relative to the link base.
mod paths {
    use uuid::Uuid;

    pub const ORDERS: &str = "api/orders";
    pub const PRODUCTS: &str = "api/products";

    pub fn order(id: Uuid) -> String {
        format!("{ORDERS}/{id}")
    }

    pub fn order_items(id: Uuid) -> String {
        format!("{ORDERS}/{id}/items")
    }

    pub fn product(id: Uuid) -> String {
        format!("{PRODUCTS}/{id}")
    }

    pub fn customer(id: Uuid) -> String {
        format!("api/customers/{id}")
    }
}

fn resolve(base: &LinkBase, path: &str) -> Result<String, DomainError> {
    base.resolve(path)
        .map_err(|err| DomainError::internal(format!("link resolution failed: {err}")))
}

fn hal_link(base: &LinkBase, path: &str) -> Result<hypermedia::Link, DomainError> {
    base.link(path)
        .map_err(|err| DomainError::internal(format!("link resolution failed: {err}")))
}

fn hal_resource<S: Serialize>(state: &S) -> Result<HalResource, DomainError> {
    HalResource::new(state)
        .map_err(|err| DomainError::internal(format!("representation assembly failed: {err}")))
}

fn resource_object<A: Serialize>(
    kind: &str,
    id: impl Into<String>,
    attributes: &A,
) -> Result<ResourceObject, DomainError> {
    ResourceObject::new(kind, id, attributes)
        .map_err(|err| DomainError::internal(format!("representation assembly failed: {err}")))
}

fn item_identifier(order_id: Uuid, line_number: usize) -> String {
    format!("{order_id}-{line_number}")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderState {
    id: Uuid,
    status: OrderStatus,
    currency: String,
    total_cents: i64,
}

impl OrderState {
    fn of(order: &Order) -> Self {
        Self {
            id: order.id,
            status: order.status,
            currency: order.currency.clone(),
            total_cents: order.total_cents(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemState {
    quantity: u32,
    unit_price_cents: i64,
    line_total_cents: i64,
}

impl ItemState {
    const fn of(item: &OrderItem) -> Self {
        Self {
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
            line_total_cents: item.line_total_cents(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductState {
    id: Uuid,
    sku: String,
    name: String,
    description: String,
    price_cents: i64,
}

impl ProductState {
    fn of(product: &Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price_cents: product.price_cents,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomerState {
    id: Uuid,
    display_name: String,
    email: String,
}

impl CustomerState {
    fn of(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            display_name: customer.display_name.clone(),
            email: customer.email.clone(),
        }
    }
}

/// HAL representation of one order, line items embedded.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or state
/// serialisation fails.
pub fn order_hal(order: &Order, base: &LinkBase) -> Result<HalResource, DomainError> {
    let mut items = Vec::with_capacity(order.items.len());
    for item in &order.items {
        items.push(order_item_hal(item, base)?);
    }
    Ok(hal_resource(&OrderState::of(order))?
        .link(Relation::Self_, hal_link(base, &paths::order(order.id))?)
        .link(
            Relation::Items,
            hal_link(base, &paths::order_items(order.id))?,
        )
        .link(
            Relation::Customer,
            hal_link(base, &paths::customer(order.customer_id))?,
        )
        .embed_all(Relation::Items, items))
}

fn order_item_hal(item: &OrderItem, base: &LinkBase) -> Result<HalResource, DomainError> {
    Ok(hal_resource(&ItemState::of(item))?.link(
        Relation::Product,
        hal_link(base, &paths::product(item.product_id))?,
    ))
}

/// HAL collection of all orders, members embedded under `item`.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or state
/// serialisation fails.
pub fn orders_hal(catalogue: &Catalogue, base: &LinkBase) -> Result<HalResource, DomainError> {
    let mut members = Vec::with_capacity(catalogue.orders().len());
    for order in catalogue.orders() {
        members.push(order_hal(order, base)?);
    }
    Ok(HalResource::empty()
        .link(Relation::Self_, hal_link(base, paths::ORDERS)?)
        .embed_all(Relation::Item, members))
}

/// HAL collection of one order's line items.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or state
/// serialisation fails.
pub fn order_items_hal(order: &Order, base: &LinkBase) -> Result<HalResource, DomainError> {
    let mut members = Vec::with_capacity(order.items.len());
    for item in &order.items {
        members.push(order_item_hal(item, base)?);
    }
    Ok(HalResource::empty()
        .link(
            Relation::Self_,
            hal_link(base, &paths::order_items(order.id))?,
        )
        .link(Relation::Collection, hal_link(base, &paths::order(order.id))?)
        .embed_all(Relation::Item, members))
}

/// HAL representation of one product.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or state
/// serialisation fails.
pub fn product_hal(product: &Product, base: &LinkBase) -> Result<HalResource, DomainError> {
    Ok(hal_resource(&ProductState::of(product))?
        .link(Relation::Self_, hal_link(base, &paths::product(product.id))?)
        .link(Relation::Collection, hal_link(base, paths::PRODUCTS)?))
}

/// HAL collection of all products.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or state
/// serialisation fails.
pub fn products_hal(catalogue: &Catalogue, base: &LinkBase) -> Result<HalResource, DomainError> {
    let mut members = Vec::with_capacity(catalogue.products().len());
    for product in catalogue.products() {
        members.push(product_hal(product, base)?);
    }
    Ok(HalResource::empty()
        .link(Relation::Self_, hal_link(base, paths::PRODUCTS)?)
        .embed_all(Relation::Item, members))
}

/// HAL representation of one customer.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or state
/// serialisation fails.
pub fn customer_hal(customer: &Customer, base: &LinkBase) -> Result<HalResource, DomainError> {
    Ok(hal_resource(&CustomerState::of(customer))?.link(
        Relation::Self_,
        hal_link(base, &paths::customer(customer.id))?,
    ))
}

/// JSON:API resource object for one order.
///
/// The `items` relationship identifies the order's synthetic line-item
/// resources; the `customer` relationship identifies the purchaser.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or attribute
/// serialisation fails.
pub fn order_resource(order: &Order, base: &LinkBase) -> Result<ResourceObject, DomainError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Attributes {
        status: OrderStatus,
        currency: String,
        total_cents: i64,
    }

    let items: Vec<ResourceIdentifier> = (1..=order.items.len())
        .map(|line| ResourceIdentifier::new(kind::ORDER_ITEMS, item_identifier(order.id, line)))
        .collect();
    Ok(resource_object(
        kind::ORDERS,
        order.id.to_string(),
        &Attributes {
            status: order.status,
            currency: order.currency.clone(),
            total_cents: order.total_cents(),
        },
    )?
    .with_self_link(resolve(base, &paths::order(order.id))?)
    .relationship(
        "items",
        Relationship::to_many(resolve(base, &paths::order_items(order.id))?, items),
    )
    .relationship(
        "customer",
        Relationship::to_one(
            resolve(base, &paths::customer(order.customer_id))?,
            Some(ResourceIdentifier::new(
                kind::CUSTOMERS,
                order.customer_id.to_string(),
            )),
        ),
    ))
}

fn order_item_resource(
    order_id: Uuid,
    line_number: usize,
    item: &OrderItem,
    base: &LinkBase,
) -> Result<ResourceObject, DomainError> {
    Ok(resource_object(
        kind::ORDER_ITEMS,
        item_identifier(order_id, line_number),
        &ItemState::of(item),
    )?
    .relationship(
        "product",
        Relationship::to_one(
            resolve(base, &paths::product(item.product_id))?,
            Some(ResourceIdentifier::new(
                kind::PRODUCTS,
                item.product_id.to_string(),
            )),
        ),
    ))
}

/// JSON:API resource object for one product.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or attribute
/// serialisation fails.
pub fn product_resource(product: &Product, base: &LinkBase) -> Result<ResourceObject, DomainError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Attributes {
        sku: String,
        name: String,
        description: String,
        price_cents: i64,
    }

    Ok(resource_object(
        kind::PRODUCTS,
        product.id.to_string(),
        &Attributes {
            sku: product.sku.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price_cents: product.price_cents,
        },
    )?
    .with_self_link(resolve(base, &paths::product(product.id))?))
}

/// JSON:API resource object for one customer.
///
/// # Errors
/// Returns an internal [`DomainError`] when link resolution or attribute
/// serialisation fails.
pub fn customer_resource(
    customer: &Customer,
    base: &LinkBase,
) -> Result<ResourceObject, DomainError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Attributes {
        display_name: String,
        email: String,
    }

    Ok(resource_object(
        kind::CUSTOMERS,
        customer.id.to_string(),
        &Attributes {
            display_name: customer.display_name.clone(),
            email: customer.email.clone(),
        },
    )?
    .with_self_link(resolve(base, &paths::customer(customer.id))?))
}

fn include_order_graph(
    mut document: Document,
    order: &Order,
    catalogue: &Catalogue,
    base: &LinkBase,
) -> Result<Document, DomainError> {
    for (index, item) in order.items.iter().enumerate() {
        document = document.include(order_item_resource(order.id, index + 1, item, base)?);
        document = document.include(product_resource(catalogue.product(item.product_id)?, base)?);
    }
    document = document.include(customer_resource(
        catalogue.customer(order.customer_id)?,
        base,
    )?);
    Ok(document)
}

/// Compound JSON:API document for one order.
///
/// # Errors
/// Returns an internal [`DomainError`] when assembly fails, or a
/// `not_found` error if the catalogue no longer resolves a reference.
pub fn order_document(
    order: &Order,
    catalogue: &Catalogue,
    base: &LinkBase,
) -> Result<Document, DomainError> {
    let document = Document::single(order_resource(order, base)?)
        .with_self_link(resolve(base, &paths::order(order.id))?);
    include_order_graph(document, order, catalogue, base)
}

/// Compound JSON:API document for the order collection.
///
/// # Errors
/// Returns an internal [`DomainError`] when assembly fails, or a
/// `not_found` error if the catalogue no longer resolves a reference.
pub fn orders_document(catalogue: &Catalogue, base: &LinkBase) -> Result<Document, DomainError> {
    let mut resources = Vec::with_capacity(catalogue.orders().len());
    for order in catalogue.orders() {
        resources.push(order_resource(order, base)?);
    }
    let mut document =
        Document::collection(resources).with_self_link(resolve(base, paths::ORDERS)?);
    for order in catalogue.orders() {
        document = include_order_graph(document, order, catalogue, base)?;
    }
    Ok(document)
}

/// JSON:API document for one order's line items, products included.
///
/// # Errors
/// Returns an internal [`DomainError`] when assembly fails, or a
/// `not_found` error if the catalogue no longer resolves a reference.
pub fn order_items_document(
    order: &Order,
    catalogue: &Catalogue,
    base: &LinkBase,
) -> Result<Document, DomainError> {
    let mut resources = Vec::with_capacity(order.items.len());
    for (index, item) in order.items.iter().enumerate() {
        resources.push(order_item_resource(order.id, index + 1, item, base)?);
    }
    let mut document = Document::collection(resources)
        .with_self_link(resolve(base, &paths::order_items(order.id))?);
    for item in &order.items {
        document = document.include(product_resource(catalogue.product(item.product_id)?, base)?);
    }
    Ok(document)
}

/// JSON:API document for one product.
///
/// # Errors
/// Returns an internal [`DomainError`] when assembly fails.
pub fn product_document(product: &Product, base: &LinkBase) -> Result<Document, DomainError> {
    Ok(Document::single(product_resource(product, base)?)
        .with_self_link(resolve(base, &paths::product(product.id))?))
}

/// JSON:API document for the product collection.
///
/// # Errors
/// Returns an internal [`DomainError`] when assembly fails.
pub fn products_document(catalogue: &Catalogue, base: &LinkBase) -> Result<Document, DomainError> {
    let mut resources = Vec::with_capacity(catalogue.products().len());
    for product in catalogue.products() {
        resources.push(product_resource(product, base)?);
    }
    Ok(Document::collection(resources).with_self_link(resolve(base, paths::PRODUCTS)?))
}

/// JSON:API document for one customer.
///
/// # Errors
/// Returns an internal [`DomainError`] when assembly fails.
pub fn customer_document(customer: &Customer, base: &LinkBase) -> Result<Document, DomainError> {
    Ok(Document::single(customer_resource(customer, base)?)
        .with_self_link(resolve(base, &paths::customer(customer.id))?))
}
