use ccss::convert;

#[test]
fn converts_nested_example() {
    let source = r#"// Comment
#header, #footer:
    margin: 0
    padding: 0
    font->
        family: Verdana, sans-serif
        size: .9em // Comment

    li:
        padding: 0.4em
        margin: 0.8em 0 0.8em

        a:
            background-image: url('abc.png')
            &:hover:
                background-color: red

        h3:
            background-image: url('http://test.com/abc.png')
            font-size: 1.2em
        p, div.p:
            padding: 0.3em
        p.meta:
            text-align: right
            color: #ddd
"#;

    let expected = r#"#header,
#footer {
    margin: 0;
    padding: 0;
    font-family: Verdana, sans-serif;
    font-size: .9em;
}
#header li,
#footer li {
    padding: 0.4em;
    margin: 0.8em 0 0.8em;
}
#header li a,
#footer li a {
    background-image: url('abc.png');
}
#header li a:hover,
#footer li a:hover {
    background-color: red;
}
#header li h3,
#footer li h3 {
    background-image: url('http://test.com/abc.png');
    font-size: 1.2em;
}
#header li p,
#header li div.p,
#footer li p,
#footer li div.p {
    padding: 0.3em;
}
#header li p.meta,
#footer li p.meta {
    text-align: right;
    color: #ddd;
}
"#;

    assert_eq!(convert(source).unwrap().replace('\t', "    "), expected);
}

#[test]
fn selector_without_definitions_produces_no_output() {
    let source = "#header:\n    a:\n";
    assert_eq!(convert(source).unwrap(), "");
}

#[test]
fn nested_scope_flattens_across_every_top_selector() {
    let source = "\
#a, #b:
    x: 1
    y:
        z: 2
";
    assert_eq!(
        convert(source).unwrap(),
        "#a,\n#b {\n\tx: 1;\n}\n#a y,\n#b y {\n\tz: 2;\n}\n"
    );
}

#[test]
fn dedent_after_unused_selector_reopens_the_parent_rule() {
    // `b:` opens (and abandons) a scope with no definitions; the next
    // definition back at the parent level starts a second rule for the
    // parent selector.
    let source = "\
a:
    x: 1
    b:
    y: 2
";
    assert_eq!(
        convert(source).unwrap(),
        "a {\n\tx: 1;\n}\na {\n\ty: 2;\n}\n"
    );
}

#[test]
fn property_prefix_scope_prefixes_declarations() {
    let source = "\
a:
    font->
        size: .9em
";
    assert_eq!(convert(source).unwrap(), "a {\n\tfont-size: .9em;\n}\n");
}

#[test]
fn prefix_scope_closes_on_dedent() {
    let source = "\
a:
    font->
        size: 10px
    color: red
";
    assert_eq!(
        convert(source).unwrap(),
        "a {\n\tfont-size: 10px;\n\tcolor: red;\n}\n"
    );
}

#[test]
fn prefix_scopes_stack_additively() {
    let source = "\
a:
    border->
        left->
            width: 1px
";
    assert_eq!(
        convert(source).unwrap(),
        "a {\n\tborder-left-width: 1px;\n}\n"
    );
}
