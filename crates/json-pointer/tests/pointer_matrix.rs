use json_pointer::{
    compile_ancestor_paths, format_pointer, parse_pointer, validate_pointer, PointerError,
};

#[test]
fn pointer_parse_format_roundtrip_matrix() {
    let cases = [
        "",
        "/foo",
        "/foo/bar",
        "/a~0b/c~1d",
        "/arr/0",
        "/~0/~1",
        "/~01",
    ];

    for pointer in cases {
        let segments = parse_pointer(pointer).unwrap();
        assert_eq!(format_pointer(&segments), pointer);
    }
}

#[test]
fn pointer_rejection_matrix() {
    let cases = [
        ("foo", PointerError::MissingLeadingSlash),
        ("a/b", PointerError::MissingLeadingSlash),
        ("/a b", PointerError::ContainsWhitespace),
        ("/a\t", PointerError::ContainsWhitespace),
        ("/a\nb", PointerError::ContainsWhitespace),
        ("//", PointerError::EmptySegment),
        ("/a//b", PointerError::EmptySegment),
        ("//a", PointerError::EmptySegment),
    ];

    for (pointer, expected) in cases {
        assert_eq!(
            validate_pointer(pointer),
            Err(expected),
            "wrong verdict for: {:?}",
            pointer
        );
        assert_eq!(parse_pointer(pointer), Err(expected));
    }
}

#[test]
fn ancestor_compilation_matrix() {
    let cases: [(&[&str], &[&str]); 6] = [
        (&[], &[]),
        (&["/"], &["/"]),
        (&["/a"], &["/"]),
        (&["/a/b", "/a/c"], &["/", "/a"]),
        (
            &["/a/b/c", "/d/e"],
            &["/", "/a", "/a/b", "/d"],
        ),
        (
            &["/a/a~0a/a~0b~1c/1"],
            &["/", "/a", "/a/a~0a", "/a/a~0a/a~0b~1c"],
        ),
    ];

    for (input, expected) in cases {
        let ancestors = compile_ancestor_paths(input.iter().copied()).unwrap();
        assert_eq!(ancestors, expected, "wrong ancestors for: {:?}", input);
    }
}

#[test]
fn ancestor_compilation_keeps_first_seen_order() {
    let ancestors = compile_ancestor_paths(["/z/y/x", "/a/b"]).unwrap();
    assert_eq!(ancestors, vec!["/", "/z", "/z/y", "/a"]);
}
