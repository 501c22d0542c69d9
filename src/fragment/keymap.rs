/// Logical adventure fields, addressable through a [`KeyMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Path,
    Title,
    Slug,
    Description,
    PrimaryImage,
    Activity,
    AdventureType,
    TripLength,
    GroupSize,
    Difficulty,
    Price,
    GearList,
    Itinerary,
}

impl Field {
    /// The response field name used when no mapping overrides it.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Path => "_path",
            Field::Title => "title",
            Field::Slug => "slug",
            Field::Description => "description",
            Field::PrimaryImage => "primaryImage",
            Field::Activity => "activity",
            Field::AdventureType => "adventureType",
            Field::TripLength => "tripLength",
            Field::GroupSize => "groupSize",
            Field::Difficulty => "difficulty",
            Field::Price => "price",
            Field::GearList => "gearList",
            Field::Itinerary => "itinerary",
        }
    }
}

/// Per-field renames for schema variants that use different response field
/// names. An unset entry resolves to the logical name itself, so the empty
/// map is the identity mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyMap {
    pub path: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub primary_image: Option<String>,
    pub activity: Option<String>,
    pub adventure_type: Option<String>,
    pub trip_length: Option<String>,
    pub group_size: Option<String>,
    pub difficulty: Option<String>,
    pub price: Option<String>,
    pub gear_list: Option<String>,
    pub itinerary: Option<String>,
}

impl KeyMap {
    pub fn resolve(&self, field: Field) -> &str {
        let mapped = match field {
            Field::Path => &self.path,
            Field::Title => &self.title,
            Field::Slug => &self.slug,
            Field::Description => &self.description,
            Field::PrimaryImage => &self.primary_image,
            Field::Activity => &self.activity,
            Field::AdventureType => &self.adventure_type,
            Field::TripLength => &self.trip_length,
            Field::GroupSize => &self.group_size,
            Field::Difficulty => &self.difficulty,
            Field::Price => &self.price,
            Field::GearList => &self.gear_list,
            Field::Itinerary => &self.itinerary,
        };
        mapped.as_deref().unwrap_or(field.name())
    }
}
