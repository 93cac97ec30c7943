//! Unit tests for `Link` header parsing.

use rstest::rstest;

use super::{Link, parse_links, split_unquoted, unquote};

#[test]
fn single_tagged_link() {
    let links = parse_links(Some(r#"</riak/b/k>; riaktag="tag1""#));
    assert_eq!(links, vec![Link::new("b", "k", "tag1")]);
}

#[rstest]
#[case::absent(None)]
#[case::empty(Some(""))]
#[case::blank(Some("   "))]
fn missing_header_yields_no_links(#[case] header: Option<&str>) {
    assert!(parse_links(header).is_empty());
}

#[rstest]
#[case::no_tag(r#"</riak/b/k>; rel="next""#)]
#[case::empty_tag(r#"</riak/b/k>; riaktag="""#)]
#[case::single_segment(r#"<k>; riaktag="t""#)]
#[case::single_rooted_segment(r#"</k>; riaktag="t""#)]
#[case::missing_angle_brackets(r#"/riak/b/k; riaktag="t""#)]
#[case::unterminated_target(r#"</riak/b/k; riaktag="t""#)]
fn malformed_entries_are_dropped(#[case] header: &str) {
    assert!(parse_links(Some(header)).is_empty(), "header: {header}");
}

#[test]
fn keeps_well_formed_entries_alongside_malformed_ones() {
    let header = r#"</riak/people>; rel="up", </riak/people/bob>; riaktag="friend", <oops>; riaktag="x", </riak/pets/rex>; riaktag=owner"#;
    let links = parse_links(Some(header));
    assert_eq!(
        links,
        vec![
            Link::new("people", "bob", "friend"),
            Link::new("pets", "rex", "owner"),
        ]
    );
}

#[test]
fn last_segment_is_key_and_previous_is_bucket() {
    let links = parse_links(Some(r#"</buckets/photos/keys/cat.jpg>; riaktag="thumb""#));
    assert_eq!(links, vec![Link::new("keys", "cat.jpg", "thumb")]);
}

#[test]
fn trailing_slash_is_ignored() {
    let links = parse_links(Some(r#"</riak/b/k/>; riaktag="t""#));
    assert_eq!(links, vec![Link::new("b", "k", "t")]);
}

#[test]
fn separators_inside_quotes_do_not_split() {
    let header = r#"</riak/b/k>; riaktag="a, b; c", </riak/b/j>; riaktag="d""#;
    let links = parse_links(Some(header));
    assert_eq!(
        links,
        vec![Link::new("b", "k", "a, b; c"), Link::new("b", "j", "d")]
    );
}

#[test]
fn tag_parameter_name_ignores_case() {
    let links = parse_links(Some(r#"</riak/b/k>; RiakTag="t""#));
    assert_eq!(links, vec![Link::new("b", "k", "t")]);
}

#[test]
fn duplicate_links_are_reported_once() {
    let header = r#"</riak/b/k>; riaktag="t", </riak/b/k>; riaktag="t""#;
    assert_eq!(parse_links(Some(header)).len(), 1);
}

#[test]
fn split_respects_angle_brackets() {
    let pieces: Vec<_> = split_unquoted("<a,b>; x=1, <c>", ',').collect();
    assert_eq!(pieces, ["<a,b>; x=1", " <c>"]);
}

#[rstest]
#[case("plain", "plain")]
#[case(r#""quoted""#, "quoted")]
#[case(r#""with \"escape\"""#, r#"with "escape""#)]
#[case(r#""unterminated"#, "unterminated")]
fn unquote_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(unquote(input), expected);
}
