use std::fs;

use durham::{get_result, interpreter::value::numeral::NUMERALS};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            let result = get_result(&code);
            assert!(result.success,
                    "Durham example {} in {:?} failed:\n{}\nError: {}",
                    i + 1,
                    path,
                    code,
                    result.output);
        }
    }

    assert!(count > 0, "No Durham examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```durham") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn output_of(src: &str) -> String {
    let result = get_result(src);
    assert!(result.success, "Script failed: {}", result.output);
    result.output
}

fn failure_of(src: &str) -> String {
    let result = get_result(src);
    assert!(!result.success, "Script succeeded but was expected to fail");
    result.output
}

#[test]
fn every_numeral_evaluates_to_its_value() {
    let src: String = NUMERALS.iter()
                              .map(|(name, _)| format!("tlc begin {name} end.\n"))
                              .collect();
    let expected = (0..=16).map(|v| v.to_string()).collect::<Vec<_>>().join("\n");

    assert_eq!(output_of(&src), expected);
}

#[test]
fn comma_joined_numerals_concatenate_digits() {
    assert_eq!(output_of("tlc begin marys, marys end."), "22");
    assert_eq!(output_of("tlc begin chads,butler,trevs end."), "107");
    assert_eq!(output_of("tlc begin chads, grey end."), "110");
}

#[test]
fn quoted_literal_prints_verbatim() {
    assert_eq!(output_of(r#"tlc begin "Hello, World!" end."#), "Hello, World!");
    assert_eq!(output_of(r#"tlc begin "a\nb" end."#), r"a\nb");
    assert_eq!(output_of(r#"tlc begin begin "wrapped" end end."#), "wrapped");
}

#[test]
fn durham_concatenates_in_order() {
    let src = r#"
        text a is begin "foo" end.
        number b is castle.
        tlc begin a durham b end.
        tlc begin b durham a end.
        tlc begin "x" durham b durham "y" end.
    "#;

    assert_eq!(output_of(src), "foo5\n5foo\nx5y");
}

#[test]
fn operators_follow_rule_order_not_precedence() {
    assert_eq!(output_of("tlc begin chads durham marys york castle end."), "110");
    assert_eq!(output_of("tlc begin snow newcastle marys newcastle chads end."), "6");
    assert_eq!(output_of("tlc begin trevs edinburgh marys end."), "3");
    assert_eq!(output_of("tlc begin -7 edinburgh marys end."), "-4");
    assert_eq!(output_of("tlc begin marys york collingwood newcastle chads end."), "4");
}

#[test]
fn text_operands_coerce_for_arithmetic() {
    let src = "text t is chads durham marys. tlc begin t york marys end.";
    assert_eq!(output_of(src), "24");
}

#[test]
fn for_loop_counts_up() {
    let src = r#"
        for begin i is butler. i lesser trevs. i is i newcastle -1 end front
            tlc begin i end.
        back.
    "#;

    assert_eq!(output_of(src), "0\n1\n2\n3\n4\n5\n6");
}

#[test]
fn for_loop_with_body_on_following_lines() {
    let src = r#"
        for begin i is collingwood. i greater butler. i is i newcastle chads end front.
            tlc begin i end.
            tlc begin "tick" end.
        back.
        tlc begin "done" end.
    "#;

    assert_eq!(output_of(src), "3\ntick\n2\ntick\n1\ntick\ndone");
}

#[test]
fn for_loop_with_missing_clause_is_skipped() {
    let src = r#"
        for begin i is butler. i lesser trevs end front
            tlc begin i end.
        back.
        tlc begin "after" end.
    "#;

    assert_eq!(output_of(src), "after");
}

#[test]
fn nested_blocks_find_their_own_terminators() {
    let src = r#"
        for begin i is butler. i lesser castle. i is i newcastle -1 end front
            if begin i equals marys end front
                tlc begin "two" end.
            back.
        back.
        tlc begin "end" end.
    "#;

    assert_eq!(output_of(src), "two\nend");
}

#[test]
fn else_marker_only_splits_the_outermost_if() {
    let program = |x: &str| {
        format!(r#"
            number x is {x}.
            if begin x greater marys end front
                if begin x lesser marys end front
                    tlc begin "a" end.
                back else front
                    tlc begin "b" end.
                back.
            back else front
                tlc begin "c" end.
            back.
            tlc begin "z" end.
        "#)
    };

    assert_eq!(output_of(&program("castle")), "b\nz");
    assert_eq!(output_of(&program("chads")), "c\nz");
}

#[test]
fn while_opens_a_nested_block_inside_if_and_for() {
    let src = r#"
        if begin chads equals butler end front.
            while begin chads end front.
                tlc begin "hidden" end.
            back.
            tlc begin "inside if" end.
        back.
        for begin i is butler. i lesser butler. i is i end front.
            while begin chads end front.
            back.
            tlc begin "inside for" end.
        back.
        tlc begin "after" end.
    "#;

    assert_eq!(output_of(src), "after");
}

#[test]
fn function_opens_a_nested_block_inside_function() {
    let src = r#"
        function outer begin a end front.
            function inner begin b end front.
                tlc begin "inner" end.
            back.
            tlc begin "outer" end.
        back.
        tlc begin "top" end.
        outer begin chads end.
        inner begin chads end.
    "#;

    assert_eq!(output_of(src), "top\nouter\ninner");
}

#[test]
fn function_does_not_open_a_nested_block_inside_if() {
    let src = r#"
        if begin chads equals butler end front.
            function f begin a end front.
                tlc begin "in f" end.
            back.
            tlc begin "leaked" end.
        back.
        tlc begin "after" end.
    "#;

    assert_eq!(output_of(src), "leaked\nafter");
}

#[test]
fn if_runs_exactly_one_branch() {
    let src = r#"
        number x is castle.
        if begin x greater marys end front
            tlc begin "big" end.
        back else front
            tlc begin "small" end.
        back.
        if begin x lesser marys end front
            tlc begin "big" end.
        back else front
            tlc begin "small" end.
        back.
        if begin x lesser marys end front
            tlc begin "never" end.
        back.
    "#;

    assert_eq!(output_of(src), "big\nsmall");
}

#[test]
fn condition_without_relation_is_false() {
    let src = r#"
        if begin castle end front
            tlc begin "then" end.
        back else front
            tlc begin "else" end.
        back.
    "#;

    assert_eq!(output_of(src), "else");
}

#[test]
fn equals_compares_text_and_numbers_strictly() {
    let src = r#"
        text t is begin "abc" end.
        if begin t equals begin "abc" end end front tlc begin "same text" end. back.
        if begin castle equals "5" end front tlc begin "mixed" end. back.
        if begin castle equals chads york castle end front tlc begin "same number" end. back.
    "#;

    assert_eq!(output_of(src), "same text\nsame number");
}

#[test]
fn function_without_return_yields_zero() {
    let src = r#"
        function noop begin x and y end front
            tlc begin "inside" end.
        back.
        tlc begin noop begin chads and marys end end.
    "#;

    assert_eq!(output_of(src), "inside\n0");
}

#[test]
fn function_call_restores_numbers_but_keeps_text() {
    let src = r#"
        number x is castle.
        text greeting is begin "hello" end.
        function mutate begin x end front
            x is snow.
            number y is chads.
            text greeting is begin "changed" end.
            mcs begin x end.
        back.
        number r is mutate begin marys end.
        tlc begin r end.
        tlc begin x end.
        tlc begin y end.
        tlc begin greeting end.
    "#;

    assert_eq!(output_of(src), "9\n5\ny\nchanged");
}

#[test]
fn missing_arguments_bind_zero() {
    let src = r#"
        function second begin a and b end front mcs begin b end. back.
        tlc begin second begin castle end end.
    "#;

    assert_eq!(output_of(src), "0");
}

#[test]
fn redeclared_function_replaces_previous_one() {
    let src = r#"
        function pick begin a end front mcs begin chads end. back.
        tlc begin pick begin butler end end.
        function pick begin a end front mcs begin marys end. back.
        tlc begin pick begin butler end end.
    "#;

    assert_eq!(output_of(src), "1\n2");
}

#[test]
fn return_inside_nested_block_ends_the_call() {
    let src = r#"
        function sign begin n end front
            if begin n lesser butler end front
                mcs begin -1 end.
            back.
            mcs begin chads end.
        back.
        tlc begin sign begin -5 end end.
        tlc begin sign begin castle end end.
    "#;

    assert_eq!(output_of(src), "-1\n1");
}

#[test]
fn recursive_function() {
    let contents = fs::read_to_string("tests/example.durham").unwrap();
    assert_eq!(output_of(&contents), "Hello, Durham!\n42\n3\n2\n1\nsmall\n120");
}

#[test]
fn call_statement_runs_for_side_effects() {
    let src = r#"
        text log is begin "none" end.
        function touch begin a end front text log is begin "touched" end. back.
        touch begin chads end.
        tlc begin log end.
    "#;

    assert_eq!(output_of(src), "touched");
}

#[test]
fn undeclared_call_falls_back_to_raw_text() {
    assert_eq!(output_of("tlc begin nope begin chads end end."), "nope begin chads end");
}

#[test]
fn unknown_identifier_falls_back_to_its_name() {
    assert_eq!(output_of("tlc begin oxford end."), "oxford");
}

#[test]
fn text_variable_wins_over_numeric_variable() {
    let src = r#"number v is chads. text v is begin "word" end. tlc begin v end."#;
    assert_eq!(output_of(src), "word");
}

#[test]
fn unrecognized_statements_are_skipped() {
    let src = r#"
        blah blah.
        number.
        tlc begin end.
        mcs begin castle end.
        tlc begin "still running" end.
    "#;

    assert_eq!(output_of(src), "still running");
}

#[test]
fn comment_lines_are_removed() {
    let src = r#"
        "this is a comment. it has a period"
        tlc begin "ok" end.
    "#;

    assert_eq!(output_of(src), "ok");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(output_of(""), "");
    assert_eq!(output_of("\"only a comment\""), "");
}

#[test]
fn loop_ceiling_is_fatal_and_discards_output() {
    let src = r#"tlc begin "before" end.
for begin i is butler. i lesser chads. i is i end front
    tlc begin i end.
back.
"#;

    assert_eq!(failure_of(src),
               "Error on line 2: Loop exceeded maximum iterations (10000).");
}

#[test]
fn loop_may_run_exactly_to_the_ceiling() {
    let src = r#"
        number n is butler.
        for begin i is butler. i lesser chads,butler,butler,butler,butler. i is i newcastle -1 end front
            n is n newcastle -1.
        back.
        tlc begin n end.
    "#;

    assert_eq!(output_of(src), "10000");
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(failure_of("tlc begin castle edinburgh butler end."),
               "Error on line 1: Division by zero.");
}

#[test]
fn arithmetic_on_non_numeric_text_yields_nan() {
    let src = r#"
        tlc begin "before" end.
        number y is foo newcastle chads.
        tlc begin y end.
        tlc begin "abc" york marys end.
        tlc begin y edinburgh butler end.
        if begin y lesser chads end front tlc begin "ordered" end. back.
        tlc begin "after" end.
    "#;

    assert_eq!(output_of(src), "before\nNaN\nNaN\nNaN\nafter");
}

#[test]
fn runs_do_not_share_state() {
    assert_eq!(output_of("number x is castle. tlc begin x end."), "5");
    assert_eq!(output_of("tlc begin x end."), "x");
}
