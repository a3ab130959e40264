use ccss::convert;

#[test]
fn media_scope_wraps_nested_rules_in_one_block() {
    let source = "\
@media print:
    a:
        x: 1
    b:
        y: 2
";
    assert_eq!(
        convert(source).unwrap(),
        "@media print {\n\
         \ta {\n\t\tx: 1;\n\t}\n\
         \tb {\n\t\ty: 2;\n\t}\n\
         }\n"
    );
}

#[test]
fn plain_rule_closes_an_open_media_block() {
    let source = "\
@media print:
    a:
        x: 1
b:
    y: 2
";
    assert_eq!(
        convert(source).unwrap(),
        "@media print {\n\ta {\n\t\tx: 1;\n\t}\n}\nb {\n\ty: 2;\n}\n"
    );
}

#[test]
fn differing_media_header_closes_the_previous_block() {
    let source = "\
@media print:
    a:
        x: 1
@media screen:
    b:
        y: 2
";
    assert_eq!(
        convert(source).unwrap(),
        "@media print {\n\ta {\n\t\tx: 1;\n\t}\n}\n\
         @media screen {\n\tb {\n\t\ty: 2;\n\t}\n}\n"
    );
}

#[test]
fn media_block_still_open_at_end_of_input_is_closed() {
    let source = "\
a:
    x: 1
@media screen:
    b:
        y: 2
";
    assert_eq!(
        convert(source).unwrap(),
        "a {\n\tx: 1;\n}\n@media screen {\n\tb {\n\t\ty: 2;\n\t}\n}\n"
    );
}

#[test]
fn media_inner_selectors_flatten_like_any_scope() {
    let source = "\
@media screen and (max-width: 600px):
    nav, aside:
        ul:
            display: none
";
    assert_eq!(
        convert(source).unwrap(),
        "@media screen and (max-width: 600px) {\n\
         \tnav ul,\naside ul {\n\t\tdisplay: none;\n\t}\n\
         }\n"
    );
}
