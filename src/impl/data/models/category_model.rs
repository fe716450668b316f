/// Category cell of the export, kept verbatim. Empty cells become an explicit
/// label so the record is still counted under some category.
#[derive(Debug)]
pub(crate) struct CategoryModel(String);

impl CategoryModel {
    pub(crate) fn parse(raw: &str, missing_label: &str) -> Self {
        if raw.is_empty() {
            log::debug!("Empty category value, using '{missing_label}'.");
            CategoryModel(missing_label.to_string())
        } else {
            CategoryModel(raw.to_string())
        }
    }
}

impl Into<String> for CategoryModel {
    fn into(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> String {
        CategoryModel::parse(raw, "(missing)").into()
    }

    #[test]
    fn keeps_cell_value_verbatim() {
        assert_eq!(parse("Mitte"), "Mitte");
        assert_eq!(parse("Mitte "), "Mitte ");
        assert_eq!(parse(" "), " ");
    }

    #[test]
    fn empty_cell_gets_missing_label() {
        assert_eq!(parse(""), "(missing)");
    }
}
