use std::fmt;

use crate::status::ApplicationStatus;

/// Sort keys the backend accepts for the applications listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    AppliedDate,
    UpdatedDate,
    Company,
    Role,
    Status,
    Platform,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        use SortField::*;
        &[AppliedDate, UpdatedDate, Company, Role, Status, Platform]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            SortField::AppliedDate => "applied_date",
            SortField::UpdatedDate => "updated_date",
            SortField::Company => "company",
            SortField::Role => "role",
            SortField::Status => "status",
            SortField::Platform => "platform",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn api_name(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Server-side filter and ordering parameters for a listing fetch.
///
/// Any change to these resets pagination; the store treats two filter
/// values as the same listing only when they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryFilters {
    pub platform: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub search: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl QueryFilters {
    /// Builds the query pairs for GET /applications.
    pub fn to_query_pairs(
        &self,
        limit: u64,
        offset: u64,
    ) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(platform) = &self.platform {
            pairs.push(("platform", platform.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.api_name().to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs.push(("sort_by", self.sort_by.api_name().to_string()));
        pairs.push(("order", self.order.api_name().to_string()));
        pairs.push(("limit", limit.to_string()));
        pairs.push(("offset", offset.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_sort_by_applied_date_descending() {
        let filters = QueryFilters::default();
        let pairs = filters.to_query_pairs(50, 0);
        assert_eq!(
            pairs,
            vec![
                ("sort_by", "applied_date".to_string()),
                ("order", "desc".to_string()),
                ("limit", "50".to_string()),
                ("offset", "0".to_string()),
            ]
        );
    }

    #[test]
    fn optional_filters_appear_when_set() {
        let filters = QueryFilters {
            platform: Some("LinkedIn".to_string()),
            status: Some(ApplicationStatus::InReview),
            search: Some("acme".to_string()),
            sort_by: SortField::Company,
            order: SortOrder::Ascending,
        };
        let pairs = filters.to_query_pairs(25, 75);
        assert_eq!(pairs[0], ("platform", "LinkedIn".to_string()));
        assert_eq!(pairs[1], ("status", "In Review".to_string()));
        assert_eq!(pairs[2], ("search", "acme".to_string()));
        assert_eq!(pairs[3], ("sort_by", "company".to_string()));
        assert_eq!(pairs[4], ("order", "asc".to_string()));
        assert_eq!(pairs[5], ("limit", "25".to_string()));
        assert_eq!(pairs[6], ("offset", "75".to_string()));
    }
}
