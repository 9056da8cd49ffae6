//! Example: Querying a people directory
//!
//! Loads configuration, installs JSON logging, seeds an in-memory repository
//! from JSON and runs list and lookup queries through the handlers.
//!
//! Run with: RUST_LOG=debug cargo run --example people_directory

use acton_query::prelude::*;
use serde_json::json;

fn directory() -> Result<InMemoryRepository<Record>> {
    let people = InMemoryRepository::from_json(
        "people",
        json!([
            {"id": 1, "name": "Ada Lovelace", "team": "research", "age": 36},
            {"id": 2, "name": "Alan Turing", "team": "research", "age": 41},
            {"id": 3, "name": "Grace Hopper", "team": "platform", "age": 85},
            {"id": 4, "name": "Edsger Dijkstra", "team": "platform", "age": 72},
            {"id": 5, "name": "Barbara Liskov", "team": "platform"},
            {"id": 6, "name": "Ken Thompson", "team": "systems", "age": 81}
        ]),
    )?;
    Ok(people)
}

fn print_page(title: &str, view: &InMemoryRepository<Record>) {
    println!("{title}");
    if let Some(paginator) = view.paginator() {
        println!(
            "  page {}/{} ({} matching)",
            paginator.page(),
            paginator.total_pages(),
            paginator.total_items()
        );
    }
    for person in view.iter() {
        let name = person.field("name").unwrap_or_default();
        let age = person.field("age").unwrap_or_default();
        println!("  #{} {name} (age {age})", person.id());
    }
}

fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let people = directory()?;

    // Archived records never show up in listings unless a caller asks for them
    let handler = CollectionQueryHandler::new(people.clone())
        .with_normalizer(DefaultsNormalizer::new(CriteriaBuilder::neq("team", "archive")))
        .with_limits(config.pagination.limits());

    let platform = Query::new()
        .with_criteria(CriteriaBuilder::eq("team", "platform"))
        .with_sort("age", OrderDirection::Descending);
    print_page("Platform team, oldest first:", &handler.handle(&platform)?);

    // Search input arrives as JSON; the blank filter is dropped during normalization
    let search: Query = serde_json::from_value(json!({
        "criteria": {
            "name": {"operator": "like", "value": "%a%"},
            "team": {"operator": "eq", "value": ""}
        },
        "page": 1,
        "items_per_page": 2,
        "sorting": [{"field": "name"}]
    }))?;
    let first = handler.handle(&search)?;
    print_page("Names containing 'a':", &first);

    if first.paginator().is_some_and(|p| p.has_next_page()) {
        let next = search.clone().with_page(2);
        print_page("Next page:", &handler.handle(&next)?);
    }

    let lookup = SingleQueryHandler::new(people);
    let grace = lookup.handle(&Query::by_id(Scalar::from(3_i64)))?;
    println!("Found {}", grace.field("name").unwrap_or_default());

    match lookup.handle(&Query::by_id(Scalar::from(42_i64))) {
        Err(error) if error.is_not_found() => println!("Lookup failed: {error}"),
        other => println!("Unexpected lookup result: {other:?}"),
    }

    Ok(())
}
