use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

pub const COUNTY_PLACEHOLDER: &str = "請選擇縣市";
pub const DISTRICT_PLACEHOLDER: &str = "請選擇鄉鎮市區";
pub const CATEGORY_PLACEHOLDER: &str = "請選擇類別";

/// County name to district names, in the order the source document lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationTable {
    counties: Vec<(String, Vec<String>)>,
}

impl LocationTable {
    pub fn insert(&mut self, county: String, districts: Vec<String>) {
        match self.counties.iter_mut().find(|(name, _)| *name == county) {
            Some((_, existing)) => *existing = districts,
            None => self.counties.push((county, districts)),
        }
    }

    pub fn counties(&self) -> impl Iterator<Item = &str> {
        self.counties.iter().map(|(name, _)| name.as_str())
    }

    pub fn districts_of(&self, county: &str) -> &[String] {
        self.counties
            .iter()
            .find(|(name, _)| name == county)
            .map(|(_, districts)| districts.as_slice())
            .unwrap_or(&[])
    }
}

impl FromIterator<(String, Vec<String>)> for LocationTable {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        let mut table = LocationTable::default();
        for (county, districts) in iter {
            table.insert(county, districts);
        }
        table
    }
}

impl<'de> Deserialize<'de> for LocationTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = LocationTable;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an object mapping county names to district lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = LocationTable::default();
                while let Some((county, districts)) = map.next_entry::<String, Vec<String>>()? {
                    table.insert(county, districts);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn named(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

/// Options of a `<select>`: a fixed placeholder followed by loaded entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptions {
    placeholder: &'static str,
    entries: Vec<DropdownOption>,
}

impl SelectOptions {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            entries: Vec::new(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn entries(&self) -> &[DropdownOption] {
        &self.entries
    }

    /// Number of `<option>` elements, placeholder included.
    pub fn option_count(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn has_only_placeholder(&self) -> bool {
        self.option_count() <= 1
    }

    pub fn truncate_to_placeholder(&mut self) {
        self.entries.clear();
    }

    pub fn extend_names<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.entries.extend(names.into_iter().map(DropdownOption::named));
    }

    /// Appends `names` only while the select still shows nothing but its placeholder.
    pub fn populate_once<'a, I>(&mut self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !self.has_only_placeholder() {
            return false;
        }
        self.extend_names(names);
        true
    }
}
