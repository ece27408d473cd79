//! Ordering clause generation.

use crate::error::OrderError;
use crate::model::AttributeDefinition;
use crate::model::Criteria;
use crate::model::DirectionMap;

use super::Sort;
use super::SortState;

impl Sort {
    /// Translates a direction map into a backend ordering clause.
    ///
    /// An empty map yields the configured default order verbatim. Otherwise
    /// every attribute is resolved again: virtual attributes contribute their
    /// expression unchanged, plain attributes are quoted through the schema
    /// (`relation.column` is split on the first dot) and get ` DESC` when
    /// descending. Fragments are joined with `", "`.
    pub fn order_clause_for(&self, directions: &DirectionMap) -> Result<String, OrderError> {
        if directions.is_empty() {
            return Ok(self.config.default_order.clone());
        }

        let mut fragments = Vec::with_capacity(directions.len());
        for (key, direction) in directions.iter() {
            let Some(definition) = self.resolve_attribute(key) else {
                log::debug!("Skipping unsortable attribute '{}' in order clause", key);
                continue;
            };

            let fragment = match definition {
                AttributeDefinition::Virtual(attribute) => attribute
                    .expression(direction)
                    .ok_or_else(|| OrderError::incomplete_virtual(key))?
                    .to_string(),
                AttributeDefinition::Plain(name) => {
                    let mut fragment = self.quote_attribute(&name);
                    if direction.is_descending() {
                        fragment.push_str(" DESC");
                    }
                    fragment
                }
            };
            fragments.push(fragment);
        }

        let clause = fragments.join(", ");
        log::trace!("Built order clause '{}' from {}", clause, directions);
        Ok(clause)
    }

    fn quote_attribute(&self, name: &str) -> String {
        let Some(schema) = self.schema.as_deref() else {
            return name.to_string();
        };
        match name.split_once('.') {
            Some((relation, column)) => format!(
                "{}.{}",
                schema.quote_relation(relation),
                schema.quote_column(column)
            ),
            None => schema.quote_column(name),
        }
    }
}

impl SortState<'_> {
    /// Returns the ordering clause for this state.
    pub fn order_clause(&self) -> Result<String, OrderError> {
        self.sort.order_clause_for(&self.directions)
    }

    /// Appends the ordering clause to the criteria's existing ordering.
    pub fn apply_order(&self, criteria: &mut Criteria) -> Result<(), OrderError> {
        let clause = self.order_clause()?;
        criteria.append_order(&clause);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::SortConfig;
    use crate::model::Direction;
    use crate::model::VirtualAttribute;
    use crate::schema::QuoteStyle;
    use crate::schema::StaticSchema;

    fn people() -> SortConfig {
        SortConfig::new()
            .with_entity("person")
            .with_attribute("age")
            .with_alias("city", "address.city")
            .with_virtual(
                "name",
                VirtualAttribute::new("first, last", "first DESC, last DESC"),
            )
            .with_multi_sort(true)
    }

    fn ansi() -> Arc<StaticSchema> {
        Arc::new(StaticSchema::new(QuoteStyle::Ansi))
    }

    #[test]
    fn test_unquoted_clause() {
        let sort = Sort::new(
            SortConfig::new()
                .with_attribute("a")
                .with_attribute("b")
                .with_multi_sort(true),
        )
        .unwrap();
        let state = sort.resolve_token(Some("a-b.desc"));
        assert_eq!(state.order_clause().unwrap(), "a, b DESC");
    }

    #[test]
    fn test_default_order_fallback() {
        let sort = Sort::new(people().with_default_order("age DESC, id")).unwrap();
        assert_eq!(sort.resolve_token(None).order_clause().unwrap(), "age DESC, id");
        assert_eq!(
            sort.resolve_token(Some("salary.desc-ssn")).order_clause().unwrap(),
            "age DESC, id"
        );
    }

    #[test]
    fn test_no_default_order() {
        let sort = Sort::new(people()).unwrap();
        assert_eq!(sort.resolve_token(Some("nope")).order_clause().unwrap(), "");
    }

    #[test]
    fn test_virtual_expressions_are_verbatim() {
        let sort = Sort::new(people()).unwrap().with_schema(ansi());
        assert_eq!(
            sort.resolve_token(Some("name")).order_clause().unwrap(),
            "first, last"
        );
        assert_eq!(
            sort.resolve_token(Some("name.desc")).order_clause().unwrap(),
            "first DESC, last DESC"
        );
    }

    #[test]
    fn test_quoting_through_schema() {
        let sort = Sort::new(people()).unwrap().with_schema(ansi());
        let state = sort.resolve_token(Some("city.desc-age-name.desc"));
        assert_eq!(
            state.order_clause().unwrap(),
            r#""address"."city" DESC, "age", first DESC, last DESC"#
        );
    }

    #[test]
    fn test_relation_split_on_first_dot() {
        let schema = Arc::new(StaticSchema::new(QuoteStyle::Backtick));
        let sort = Sort::new(SortConfig::new().with_alias("deep", "author.profile.name"))
            .unwrap()
            .with_schema(schema);
        assert_eq!(
            sort.resolve_token(Some("deep")).order_clause().unwrap(),
            "`author`.`profile.name`"
        );
    }

    #[test]
    fn test_raw_names_without_schema() {
        let sort = Sort::new(people()).unwrap();
        assert_eq!(
            sort.resolve_token(Some("city-age.desc")).order_clause().unwrap(),
            "address.city, age DESC"
        );
    }

    #[test]
    fn test_incomplete_virtual_is_an_error() {
        let sort = Sort::new(
            SortConfig::new().with_virtual(
                "name",
                VirtualAttribute {
                    asc: Some("first".to_string()),
                    ..Default::default()
                },
            ),
        )
        .unwrap();

        // Missing `desc` is fatal even for an ascending request.
        let err = sort.resolve_token(Some("name")).order_clause().unwrap_err();
        assert_eq!(err, OrderError::incomplete_virtual("name"));
        assert_eq!(err.attribute(), "name");
    }

    #[test]
    fn test_unresolvable_keys_never_reach_the_clause() {
        let sort = Sort::new(people()).unwrap();
        let directions = DirectionMap::from([
            ("age", Direction::Asc),
            ("1; DROP TABLE person", Direction::Desc),
        ]);
        assert_eq!(sort.order_clause_for(&directions).unwrap(), "age");
    }

    #[test]
    fn test_apply_order_appends() {
        let sort = Sort::new(people()).unwrap();
        let state = sort.resolve_token(Some("age.desc"));

        let mut criteria = Criteria::new().with_order("pinned DESC");
        state.apply_order(&mut criteria).unwrap();
        assert_eq!(criteria.order(), "pinned DESC, age DESC");

        let mut criteria = Criteria::new();
        state.apply_order(&mut criteria).unwrap();
        assert_eq!(criteria.order(), "age DESC");
    }

    #[test]
    fn test_apply_order_without_sort_or_default() {
        let sort = Sort::new(people()).unwrap();
        let mut criteria = Criteria::new().with_order("id");
        sort.resolve_token(None).apply_order(&mut criteria).unwrap();
        assert_eq!(criteria.order(), "id");
    }

    #[test]
    fn test_apply_order_leaves_criteria_on_error() {
        let sort =
            Sort::new(SortConfig::new().with_virtual("v", VirtualAttribute::default())).unwrap();
        let mut criteria = Criteria::new().with_order("id");
        assert!(sort.resolve_token(Some("v")).apply_order(&mut criteria).is_err());
        assert_eq!(criteria.order(), "id");
    }
}
