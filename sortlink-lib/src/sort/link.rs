//! Sort link generation.

use crate::model::AttributeDefinition;
use crate::model::Direction;
use crate::model::DirectionMap;
use crate::render::HtmlAttributes;
use crate::render::LinkRenderer;

use super::Sort;
use super::SortState;

impl Sort {
    /// Encodes a direction map back into a sort token.
    ///
    /// This is the inverse of [`Sort::parse`] for any map it produced.
    pub fn encode(&self, directions: &DirectionMap) -> String {
        let mut token = String::new();
        for (i, (key, direction)) in directions.iter().enumerate() {
            if i > 0 {
                token.push(self.config.attribute_separator);
            }
            token.push_str(key);
            if direction.is_descending() {
                token.push(self.config.direction_separator);
                token.push_str(&self.config.descending_tag);
            }
        }
        token
    }

    /// Returns the display label of a sort key.
    ///
    /// An explicit `label` always wins. Unsortable keys are returned as-is.
    /// Virtual attributes use their own label when they have one; everything
    /// else asks the schema, using the resolved attribute name for plain
    /// references. Without a schema the key itself is the label.
    pub fn label_for(&self, attribute: &str, label: Option<&str>) -> String {
        if let Some(label) = label {
            return label.to_string();
        }

        let name = match self.resolve_attribute(attribute) {
            None => return attribute.to_string(),
            Some(AttributeDefinition::Virtual(v)) => match v.label {
                Some(label) => return label,
                None => attribute.to_string(),
            },
            Some(AttributeDefinition::Plain(name)) => name,
        };

        match (self.schema.as_deref(), self.config.entity.as_deref()) {
            (Some(schema), Some(entity)) => schema.attribute_label(entity, &name),
            _ => attribute.to_string(),
        }
    }

    /// Direction requested the first time an attribute is clicked.
    fn initial_direction(&self, attribute: &str) -> Direction {
        match self.resolve_attribute(attribute) {
            Some(AttributeDefinition::Virtual(v)) => v.default.unwrap_or_default(),
            _ => Direction::Asc,
        }
    }
}

impl SortState<'_> {
    /// Computes the sort state a click on `attribute` should request.
    ///
    /// A sorted attribute flips its direction; an unsorted one starts
    /// ascending (or at its virtual default). In multi-sort mode the clicked
    /// attribute becomes the primary key, followed by the other current
    /// attributes in their existing order.
    pub fn next_state(&self, attribute: &str) -> DirectionMap {
        let direction = match self.directions.get(attribute) {
            Some(current) => current.reversed(),
            None => self.sort.initial_direction(attribute),
        };

        let mut next = DirectionMap::new();
        next.insert(attribute, direction);
        if self.sort.config.multi_sort {
            for (key, direction) in self.directions.iter() {
                if key != attribute {
                    next.insert(key, direction);
                }
            }
        }
        next
    }

    /// Builds the URL that requests [`next_state`](Self::next_state) for `attribute`.
    ///
    /// The encoded state is merged into the configured fixed parameters, or
    /// into the request's own parameters when none are configured.
    pub fn url_for(&self, attribute: &str) -> String {
        let config = &self.sort.config;
        let token = self.sort.encode(&self.next_state(attribute));

        let mut params = config
            .params
            .clone()
            .unwrap_or_else(|| self.request_params.clone());
        params.insert(config.sort_param.clone(), token);

        self.sort.router.build_url(&config.route, &params)
    }

    /// Renders a sort link for `attribute`.
    ///
    /// Unsortable attributes are returned as their plain label. Sorted
    /// attributes get an `asc`/`desc` CSS class reflecting their current
    /// direction, while the link itself points at the toggled state.
    pub fn link(
        &self,
        attribute: &str,
        label: Option<&str>,
        mut attributes: HtmlAttributes,
        renderer: &dyn LinkRenderer,
    ) -> String {
        let label = self.sort.label_for(attribute, label);
        if self.sort.resolve_attribute(attribute).is_none() {
            return label;
        }

        if let Some(direction) = self.direction_of(attribute) {
            let class = direction.css_class();
            attributes
                .entry("class".to_string())
                .and_modify(|existing| {
                    if !existing.is_empty() {
                        existing.push(' ');
                    }
                    existing.push_str(class);
                })
                .or_insert_with(|| class.to_string());
        }

        let url = self.url_for(attribute);
        renderer.render_link(&label, &url, &attributes)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::SortConfig;
    use crate::model::Params;
    use crate::model::VirtualAttribute;
    use crate::model::parse_query;
    use crate::render::HtmlLinkRenderer;
    use crate::routing::QueryStringRouter;
    use crate::schema::QuoteStyle;
    use crate::schema::StaticSchema;

    fn abc(multi_sort: bool) -> Sort {
        Sort::new(
            SortConfig::new()
                .with_attribute("a")
                .with_attribute("b")
                .with_attribute("c")
                .with_multi_sort(multi_sort),
        )
        .unwrap()
    }

    #[test]
    fn test_toggle_single_sort() {
        let sort = abc(false);
        let state = sort.resolve_token(Some("a"));
        assert_eq!(state.next_state("a"), DirectionMap::from([("a", Direction::Desc)]));
        assert_eq!(state.next_state("b"), DirectionMap::from([("b", Direction::Asc)]));

        let state = sort.resolve_token(Some("a.desc"));
        assert_eq!(state.next_state("a"), DirectionMap::from([("a", Direction::Asc)]));
    }

    #[test]
    fn test_toggle_from_empty() {
        let sort = abc(true);
        let state = sort.resolve_token(None);
        assert_eq!(state.next_state("a"), DirectionMap::from([("a", Direction::Asc)]));
    }

    #[test]
    fn test_multi_sort_promotes_clicked_attribute() {
        let sort = abc(true);
        let state = sort.resolve_token(Some("a-b.desc-c"));

        assert_eq!(
            state.next_state("b"),
            DirectionMap::from([
                ("b", Direction::Asc),
                ("a", Direction::Asc),
                ("c", Direction::Asc),
            ])
        );
        assert_eq!(
            state.next_state("c"),
            DirectionMap::from([
                ("c", Direction::Desc),
                ("a", Direction::Asc),
                ("b", Direction::Desc),
            ])
        );
    }

    #[test]
    fn test_multi_sort_adds_new_attribute_first() {
        let sort = abc(true);
        let state = sort.resolve_token(Some("a.desc"));
        assert_eq!(
            state.next_state("c"),
            DirectionMap::from([("c", Direction::Asc), ("a", Direction::Desc)])
        );
    }

    #[test]
    fn test_virtual_default_direction() {
        let sort = Sort::new(
            SortConfig::new().with_virtual(
                "recent",
                VirtualAttribute::new("created", "created DESC").with_default(Direction::Desc),
            ),
        )
        .unwrap();
        let state = sort.resolve_token(None);
        assert_eq!(
            state.next_state("recent"),
            DirectionMap::from([("recent", Direction::Desc)])
        );

        let state = sort.resolve_token(Some("recent.desc"));
        assert_eq!(
            state.next_state("recent"),
            DirectionMap::from([("recent", Direction::Asc)])
        );
    }

    #[test]
    fn test_encode() {
        let sort = abc(true);
        assert_eq!(sort.encode(&DirectionMap::new()), "");
        assert_eq!(
            sort.encode(&DirectionMap::from([("a", Direction::Asc), ("b", Direction::Desc)])),
            "a-b.desc"
        );
    }

    #[test]
    fn test_round_trip() {
        let multi = abc(true);
        for token in ["a", "a.desc", "c-a.desc-b", "b.desc-c.desc", "a-x-b.nope-c.desc"] {
            let parsed = multi.parse(Some(token));
            assert_eq!(multi.parse(Some(&multi.encode(&parsed))), parsed, "{token}");
        }

        let single = abc(false);
        let parsed = single.parse(Some("b.desc-a"));
        assert_eq!(single.encode(&parsed), "b.desc");
        assert_eq!(single.parse(Some(&single.encode(&parsed))), parsed);
    }

    #[test]
    fn test_url_reuses_request_params() {
        let sort = abc(true);
        let params = parse_query("page=2&sort=a&q=x%20y");
        let state = sort.resolve(&params);
        assert_eq!(state.url_for("a"), "?page=2&sort=a.desc&q=x%20y");
        assert_eq!(state.url_for("b"), "?page=2&sort=b-a&q=x%20y");
    }

    #[test]
    fn test_url_uses_fixed_params_and_route() {
        let mut fixed = Params::new();
        fixed.insert("view".to_string(), "grid".to_string());
        let sort = Sort::new(
            SortConfig::new()
                .with_attribute("a")
                .with_route("posts/index")
                .with_params(fixed),
        )
        .unwrap()
        .with_router(Arc::new(QueryStringRouter::new("/admin")));

        let state = sort.resolve(&parse_query("page=9&sort=a"));
        assert_eq!(state.url_for("a"), "/admin/posts/index?view=grid&sort=a.desc");
    }

    #[test]
    fn test_labels() {
        let schema = StaticSchema::new(QuoteStyle::Ansi)
            .with_entity("post", ["title", "created_at"])
            .with_label("post", "created_at", "Published");
        let sort = Sort::new(
            SortConfig::new()
                .with_entity("post")
                .with_attribute("title")
                .with_alias("date", "created_at")
                .with_virtual("author", VirtualAttribute::new("a", "a DESC").with_label("Writer"))
                .with_virtual("score", VirtualAttribute::new("s", "s DESC")),
        )
        .unwrap()
        .with_schema(Arc::new(schema));

        assert_eq!(sort.label_for("title", None), "Title");
        assert_eq!(sort.label_for("date", None), "Published");
        assert_eq!(sort.label_for("author", None), "Writer");
        assert_eq!(sort.label_for("score", None), "Score");
        assert_eq!(sort.label_for("secret", None), "secret");
        assert_eq!(sort.label_for("title", Some("Headline")), "Headline");
    }

    #[test]
    fn test_labels_without_schema() {
        let sort = Sort::new(SortConfig::new().with_alias("date", "created_at")).unwrap();
        assert_eq!(sort.label_for("date", None), "date");
    }

    #[test]
    fn test_link_marks_current_direction() {
        let sort = abc(false);
        let state = sort.resolve_token(Some("a"));
        let renderer = HtmlLinkRenderer::new();

        assert_eq!(
            state.link("a", Some("A"), HtmlAttributes::new(), &renderer),
            r#"<a href="?sort=a.desc" class="asc">A</a>"#
        );
        assert_eq!(
            state.link("b", None, HtmlAttributes::new(), &renderer),
            r#"<a href="?sort=b">b</a>"#
        );
    }

    #[test]
    fn test_link_appends_to_existing_class() {
        let sort = abc(false);
        let state = sort.resolve_token(Some("b.desc"));
        let mut attrs = HtmlAttributes::new();
        attrs.insert("class".to_string(), "sort".to_string());

        assert_eq!(
            state.link("b", None, attrs, &HtmlLinkRenderer::new()),
            r#"<a href="?sort=b" class="sort desc">b</a>"#
        );
    }

    #[test]
    fn test_link_for_unsortable_attribute_is_plain_label() {
        let sort = abc(false);
        let state = sort.resolve_token(None);
        assert_eq!(
            state.link(
                "password",
                Some("Password"),
                HtmlAttributes::new(),
                &HtmlLinkRenderer::new()
            ),
            "Password"
        );
        assert_eq!(
            state.link("password", None, HtmlAttributes::new(), &HtmlLinkRenderer::new()),
            "password"
        );
    }
}
