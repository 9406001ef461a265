//! A housing listing form, driven the way a UI layer would drive it.
//!
//! Run with `RUST_LOG=formwork=debug` to watch passes and validity flips.

use chrono::NaiveDate;
use formwork::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn listing_form() -> Result<Form, FormError> {
    Form::builder()
        .push(Field::text_line("title").label("Title").validator(required()))
        .push(Component::row(
            Field::numeric("price")
                .label("Monthly rent")
                .validators([required().into_any(), between(100.0_f64, 10_000.0_f64).into_any()]),
            Field::option::<u32>("bedrooms")
                .label("Bedrooms")
                .validator(not_null::<u32>().erase()),
        ))
        .push(
            Group::new([Field::date_range("lease").label("Lease").validator(required())])
                .title("Availability")
                .check(|values| {
                    values
                        .get_as::<DateRange>("lease")
                        .is_none_or(|lease| lease.lower <= lease.upper)
                })
                .child(Field::date("move_in").label("Move-in").validator_with(|values| {
                    let latest = values
                        .get_as::<DateRange>("lease")
                        .map_or(DISTANT_FUTURE, |lease| lease.lower);
                    at_most(latest).with_message_fn(|d| format!("Move in by {d}"))
                })),
        )
        .push(
            Field::image_picker("photos")
                .label("Photos")
                .validator(at_least(1).with_message("Add at least one photo")),
        )
        .build()
}

fn print(snapshot: &FormSnapshot) {
    println!("pass {}: valid = {}", snapshot.state.pass, snapshot.is_valid());
    for (key, message) in snapshot.messages() {
        println!("  {key}: {message}");
    }
    for group in snapshot.groups.iter().filter(|g| g.message.is_some()) {
        println!(
            "  [{}] {}",
            group.title.as_deref().unwrap_or("group"),
            group.message.as_deref().unwrap_or_default()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut form = listing_form()?;
    form.subscribe(|state| println!("submit button enabled: {}", state.is_valid));

    let mut values = FormValues::new().with("title", String::from("Sunny loft"));
    print(&form.render(&values));

    if let Err(errors) = form.submit(&values) {
        println!("submit rejected:\n{errors}");
    }
    print(&form.render(&values));

    let start = NaiveDate::from_ymd_opt(2025, 6, 1).ok_or("bad date")?;
    let end = NaiveDate::from_ymd_opt(2026, 5, 31).ok_or("bad date")?;
    values.set("price", 1_250.0_f64);
    values.set("bedrooms", Some(2_u32));
    values.set("lease", DateRange::new(end, start));
    values.set("move_in", start);
    values.set(
        "photos",
        ImageSelection {
            selected: vec![String::from("loft.jpg")],
            existing: Vec::new(),
        },
    );
    print(&form.render(&values));

    values.set("lease", DateRange::new(start, end));
    let state = form.submit(&values)?;
    println!("submitted in pass {}", state.pass);
    Ok(())
}
