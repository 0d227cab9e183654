#[cfg(test)]
mod tests {
    use crate::order::{SortOrder, set_default_sort_order_scoped};
    use crate::substitute::{substitute, substitute_default};
    use pretty_assertions::assert_eq;

    const ID_TEMPLATE: &str = "SELECT * FROM t WHERE id = :id AND name = :identifier";

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let entries = [("id", "5"), ("name", "\"Bob\"")];
        for order in [SortOrder::ValueLength, SortOrder::LongestName] {
            assert_eq!(
                substitute("SELECT 1 FROM dual", &entries, order),
                "SELECT 1 FROM dual"
            );
        }
        let none: [(&str, &str); 0] = [];
        assert_eq!(
            substitute("SELECT :x", &none, SortOrder::ValueLength),
            "SELECT :x"
        );
    }

    #[test]
    fn longest_name_first_keeps_prefix_names_apart() {
        let entries = [("id", "5"), ("identifier", "\"Bob\"")];
        assert_eq!(
            substitute(ID_TEMPLATE, &entries, SortOrder::LongestName),
            "SELECT * FROM t WHERE id = 5 AND name = \"Bob\""
        );
    }

    // 按值长度排序时，`id` 的字面量更短会先尝试，于是吃掉了 `:identifier` 的前缀。
    // 这是沿用下来的已知缺陷，测试用来固定现有行为。
    #[test]
    fn value_length_order_can_split_longer_names() {
        let entries = [("id", "5"), ("identifier", "\"Bob\"")];
        assert_eq!(
            substitute(ID_TEMPLATE, &entries, SortOrder::ValueLength),
            "SELECT * FROM t WHERE id = 5 AND name = 5entifier"
        );
    }

    #[test]
    fn value_length_order_is_correct_when_longer_name_has_shorter_value() {
        let entries = [("id", "100"), ("identifier", "1")];
        assert_eq!(
            substitute(ID_TEMPLATE, &entries, SortOrder::ValueLength),
            "SELECT * FROM t WHERE id = 100 AND name = 1"
        );
    }

    #[test]
    fn value_length_ties_keep_insertion_order() {
        let first_short = [("id", "1"), ("identifier", "2")];
        assert_eq!(
            substitute(ID_TEMPLATE, &first_short, SortOrder::ValueLength),
            "SELECT * FROM t WHERE id = 1 AND name = 1entifier"
        );

        let first_long = [("identifier", "2"), ("id", "1")];
        assert_eq!(
            substitute(ID_TEMPLATE, &first_long, SortOrder::ValueLength),
            "SELECT * FROM t WHERE id = 1 AND name = 2"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let entries = [("n", "3")];
        assert_eq!(
            substitute("SELECT :n + :n, :n", &entries, SortOrder::ValueLength),
            "SELECT 3 + 3, 3"
        );
    }

    #[test]
    fn inserted_text_is_not_rescanned() {
        let entries = [("a", ":b"), ("b", "2")];
        assert_eq!(
            substitute("VALUES (:a, :b)", &entries, SortOrder::ValueLength),
            "VALUES (:b, 2)"
        );
    }

    #[test]
    fn unknown_placeholders_and_bare_colons_survive() {
        let entries = [("a", "1")];
        assert_eq!(
            substitute(
                "SELECT :a, :missing, '12:30', x::int",
                &entries,
                SortOrder::LongestName
            ),
            "SELECT 1, :missing, '12:30', x::int"
        );
    }

    #[test]
    fn marker_in_names_is_optional_and_empty_names_are_skipped() {
        let entries = [(":a", "1"), ("", "X")];
        assert_eq!(
            substitute("a: :a :", &entries, SortOrder::ValueLength),
            "a: 1 :"
        );
    }

    #[test]
    fn multibyte_template() {
        let entries = [("name", "\"张三\"")];
        assert_eq!(
            substitute("名字 = :name，完", &entries, SortOrder::ValueLength),
            "名字 = \"张三\"，完"
        );
    }

    #[test]
    fn default_order_follows_scoped_setting() {
        let entries = [("id", "5"), ("identifier", "\"Bob\"")];

        let _g = set_default_sort_order_scoped(SortOrder::LongestName);
        assert_eq!(
            substitute_default(ID_TEMPLATE, &entries),
            "SELECT * FROM t WHERE id = 5 AND name = \"Bob\""
        );
    }
}
