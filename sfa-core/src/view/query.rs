use std::fmt;

/// The orderings the product list offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SortKey {
    /// Ascending by id
    #[default]
    Default,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Alphabetical by title
    TitleAsc,
    /// Reverse alphabetical by title
    TitleDesc,
    /// Highest rated first
    Rating,
}

impl SortKey {
    /// Every key, in the order the sort dropdown lists them.
    pub const ALL: [SortKey; 6] = [
        SortKey::Default,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::Rating,
    ];

    /// The value used in URLs and forms.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::Rating => "rating",
        }
    }

    /// The label shown in the sort dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::TitleAsc => "Name: A to Z",
            SortKey::TitleDesc => "Name: Z to A",
            SortKey::Rating => "Highest Rated",
        }
    }

    /// Read a URL or form value. Anything unrecognized sorts by default.
    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The view parameters of the product list.
///
/// A `ListQuery` is an immutable value: the page URL is read into one, the
/// filtered view is derived from one, and the URL is written back from one.
/// Its serialized form is the canonical set of URL parameters, so an empty
/// search, the "all" category and the default sort never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawListQuery", into = "RawListQuery")
)]
pub struct ListQuery {
    /// Case-insensitive text to look for in titles and descriptions
    pub search: String,
    /// The category to restrict to; `None` shows every category
    pub category: Option<String>,
    /// The ordering of the view
    pub sort: SortKey,
}

impl ListQuery {
    /// Build a query from raw parameter values, as found in URLs and forms.
    pub fn from_params(search: Option<&str>, category: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            search: search.unwrap_or_default().to_owned(),
            category: category
                .filter(|category| !category.is_empty() && *category != "all")
                .map(str::to_owned),
            sort: sort.map(SortKey::from_param).unwrap_or_default(),
        }
    }

    /// Whether any parameter differs from its default.
    pub fn is_filtered(&self) -> bool {
        self != &Self::default()
    }

    /// The category parameter as the dropdown sees it.
    pub fn category_param(&self) -> &str {
        self.category.as_deref().unwrap_or("all")
    }

    /// The canonical query string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            serializer.append_pair("search", &self.search);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if self.sort != SortKey::Default {
            serializer.append_pair("sort", self.sort.as_str());
        }
        serializer.finish()
    }

    /// `path` with the canonical query string appended, if there is one.
    pub fn href(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{query}")
        }
    }
}

// URLs and forms carry plain optional strings. We (de)serialize through this
// raw shape so that "all", empty strings and unknown sort keys collapse to
// their defaults instead of being rejected.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct RawListQuery {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    search: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    category: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    sort: Option<String>,
}

impl From<RawListQuery> for ListQuery {
    fn from(value: RawListQuery) -> Self {
        Self::from_params(
            value.search.as_deref(),
            value.category.as_deref(),
            value.sort.as_deref(),
        )
    }
}

impl From<ListQuery> for RawListQuery {
    fn from(value: ListQuery) -> Self {
        Self {
            search: Some(value.search).filter(|search| !search.is_empty()),
            category: value.category,
            sort: Some(value.sort)
                .filter(|sort| *sort != SortKey::Default)
                .map(|sort| sort.as_str().to_owned()),
        }
    }
}
