use serde_json::Value;

use super::{Adventure, Field, ImageRef, KeyMap, RichText};

/// Flatten one raw GraphQL item into an [`Adventure`].
///
/// A missing item (`None`, JSON null, or a non-object) yields `None`; the
/// caller treats that as "not found", not as an error. Individual fields the
/// item does not carry are skipped.
pub fn normalize(raw: Option<&Value>, keys: Option<&KeyMap>) -> Option<Adventure> {
    let item = raw?.as_object()?;
    let identity = KeyMap::default();
    let keys = keys.unwrap_or(&identity);

    let field = |f: Field| item.get(keys.resolve(f));
    let text = |f: Field| field(f).and_then(Value::as_str).map(str::to_string);
    let rich = |f: Field| {
        field(f).and_then(|v| serde_json::from_value::<RichText>(v.clone()).ok())
    };

    Some(Adventure {
        path: text(Field::Path).unwrap_or_default(),
        title: text(Field::Title),
        slug: text(Field::Slug),
        description: rich(Field::Description),
        primary_image: field(Field::PrimaryImage)
            .and_then(|v| serde_json::from_value::<ImageRef>(v.clone()).ok()),
        activity: text(Field::Activity),
        adventure_type: text(Field::AdventureType),
        trip_length: text(Field::TripLength),
        group_size: field(Field::GroupSize).and_then(Value::as_i64),
        difficulty: text(Field::Difficulty),
        price: field(Field::Price).and_then(Value::as_f64),
        gear_list: rich(Field::GearList),
        itinerary: rich(Field::Itinerary),
    })
}
