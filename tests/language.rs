use std::{fs, io::Cursor};

use iorn::{
    interpreter::{
        io::{Host, LineInput},
        preprocessor::strip_comments,
    },
    run_script,
};
use walkdir::WalkDir;

struct Run {
    completed:   bool,
    output:      Vec<String>,
    diagnostics: Vec<String>,
    prompts:     String,
}

fn run_with_input(src: &str, entries: &str) -> Run {
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<String> = Vec::new();
    let mut prompts: Vec<u8> = Vec::new();

    let completed = {
        let mut input = LineInput::new(Cursor::new(entries.to_string()), &mut prompts);
        let mut host = Host { output:      &mut output,
                              diagnostics: &mut diagnostics,
                              input:       &mut input, };
        run_script(src, &mut host)
    };

    Run { completed,
          output,
          diagnostics,
          prompts: String::from_utf8(prompts).unwrap() }
}

fn run(src: &str) -> Run {
    run_with_input(&format!("import terminal.*;\n{src}"), "")
}

fn assert_output(src: &str, expected: &[&str]) {
    let run = run(src);
    assert!(run.completed, "Script was aborted: {:?}", run.diagnostics);
    assert!(run.diagnostics.is_empty(),
            "Script reported diagnostics: {:?}",
            run.diagnostics);
    assert_eq!(run.output, expected);
}

fn assert_diagnostic(src: &str, expected: &str) -> Run {
    let run = run(src);
    assert!(run.completed, "Script was aborted: {:?}", run.diagnostics);
    assert!(run.diagnostics.iter().any(|d| d.contains(expected)),
            "Expected a diagnostic containing {expected:?}, got {:?}",
            run.diagnostics);
    run
}

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "iorn"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let run = run_with_input(&script, "");
        assert!(run.completed && run.diagnostics.is_empty(),
                "Script {path:?} failed: {:?}",
                run.diagnostics);
        assert_eq!(run.output,
                   expected.lines().collect::<Vec<_>>(),
                   "Script {path:?} printed the wrong output");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn arithmetic_follows_precedence() {
    assert_output("new variable a numeric = 2+3*4;\nPrint(f\"$[a]\");", &["14"]);
    assert_output("new variable a numeric = (2+3)*4;\nPrint(f\"$[a]\");", &["20"]);
    assert_output("new variable a numeric = 10 - 4 - 3;\nPrint(f\"$[a]\");", &["3"]);
    assert_output("new variable a numeric = 2 * (3 + (4 - 1)) ^ 2;\nPrint(f\"$[a]\");",
                  &["72"]);
}

#[test]
fn exponentiation_chains_left_to_right() {
    assert_output("new variable a numeric = 2^3^2;\nPrint(f\"$[a]\");", &["64"]);
    assert_output("new variable a numeric = 2**3;\nPrint(f\"$[a]\");", &["8"]);
    assert_output("new variable a numeric = -2^2;\nPrint(f\"$[a]\");", &["4"]);
}

#[test]
fn division_and_modulo_by_zero_yield_zero() {
    assert_output("new variable a numeric = 5/0;\nPrint(f\"$[a]\");", &["0"]);
    assert_output("new variable a floating = 5 % 0;\nPrint(f\"$[a]\");", &["0.0"]);
    assert_output("new variable a floating = 7.5 % 2;\nPrint(f\"$[a]\");", &["1.5"]);
}

#[test]
fn numeric_results_truncate_toward_zero() {
    assert_output("new variable a numeric = 7 / 2;\nnew variable b numeric = -7 / 2;\nPrint(f\"$[a] \
                   $[b]\");",
                  &["3 -3"]);
}

#[test]
fn arithmetic_reads_numeric_variables() {
    assert_output("new variable a numeric = 4;\nnew variable b floating = a * 1.5;\nPrint(f\"$[b]\");",
                  &["6.0"]);
    assert_diagnostic("new variable a numeric = b + 1;", "Variable 'b' does not exist");
    assert_diagnostic("new variable s string = \"x\";\nnew variable a numeric = s + 1;",
                      "does not hold a number");
}

#[test]
fn malformed_arithmetic_rejects_the_declaration() {
    let run = assert_diagnostic("new variable a numeric = 2 + * 3;\nPrint(f\"$[a]\");",
                                "Error on line 2: Invalid mathematical expression.");
    assert_eq!(run.output, ["$[a]"]);
}

#[test]
fn duplicate_declaration_keeps_the_first_value() {
    let run = assert_diagnostic("new variable x numeric = 5;\nnew variable x numeric = \
                                 6;\nPrint(f\"$[x]\");",
                                "Error on line 3: Variable 'x' is already declared.");
    assert_eq!(run.output, ["5"]);
    assert_eq!(run.diagnostics.len(), 1);
}

#[test]
fn literals_must_match_their_declared_type() {
    assert_diagnostic("new variable a string = hello;", "String value must be enclosed in quotes");
    assert_diagnostic("new variable a numeric = 1.5;", "Invalid numeric value '1.5'");
    assert_diagnostic("new variable a floating = 2;", "Must contain decimal point");
    assert_diagnostic("new variable a boolean = true;", "Boolean value must be TRUE or FALSE");
    assert_diagnostic("new variable _a numeric = 1;", "Must start with a letter");
    assert_output("new variable a floating = -2.25;\nnew variable b boolean = FALSE;\nPrint(f\"$[a] \
                   $[b]\");",
                  &["-2.25 FALSE"]);
}

#[test]
fn rename_requires_an_existing_variable() {
    let run = assert_diagnostic("rename variable y numeric = 1;\nPrint(f\"$[y]\");",
                                "Variable 'y' does not exist");
    assert_eq!(run.output, ["$[y]"]);
}

#[test]
fn rename_skips_validation() {
    assert_output("new variable x numeric = 1;\nrename variable x numeric = 2 + 3;\nPrint(f\"$[x]\");",
                  &["2 + 3"]);
    assert_output("new variable s string = \"a\";\nrename variable s string = \"b\";\nPrint(f\"$[s]\");",
                  &["b"]);
}

#[test]
fn null_declarations_overwrite_silently() {
    assert_output("new variable x numeric = 1;\nnew variable x NULL;\nPrint(f\"$[x]\");",
                  &["null"]);
}

#[test]
fn interpolation_resolves_declared_names() {
    assert_output("new variable name string = \"World\";\nPrint(f\"Hello $[name]\");",
                  &["Hello World"]);
    assert_output("new variable a string = \"$[a]\";\nPrint(f\"$[a] $[b] $[ a ]\");",
                  &["$[a] $[b] $[ a ]"]);
    assert_output("new variable a string = \"x\";\nPrint(\"$[a]\");", &["$[a]"]);
}

#[test]
fn numeric_looking_text_compares_numerically() {
    assert_output("if (\"5\" == 5.0) then: Print(\"numeric\"); else perform: Print(\"text\"); endif;",
                  &["numeric"]);
    assert_output("new variable n numeric = 5;\nif (n == \"5.0\") then: Print(\"yes\"); endif;",
                  &["yes"]);
    assert_output("if (\"b\" > \"abc\") then: Print(\"ordinal\"); endif;", &["ordinal"]);
    assert_output("if (\"b\" != \"b \") then: Print(\"trimmed?\"); else perform: Print(\"trimmed\"); \
                   endif;",
                  &["trimmed"]);
}

#[test]
fn conditions_on_variables_compare_their_text() {
    assert_output("new variable s string = \"Ann\";\nif (s == \"Ann\") then:\n    Print(\"hi \
                   Ann\");\nendif;",
                  &["hi Ann"]);
    assert_output("new variable flag boolean = TRUE;\nif (flag == TRUE) then: Print(\"set\"); endif;",
                  &["set"]);
    assert_output("new variable x numeric = 5;\nif (x + 1 == 6) then: Print(\"sum\"); else perform: \
                   Print(\"text\"); endif;",
                  &["text"]);
    assert_output("new variable x numeric = 5;\nif (x + 1 == \"5+1\") then: Print(\"spliced\"); endif;",
                  &["spliced"]);
    assert_output("new variable x numeric = 5;\nif (xy == \"xy\") then: Print(\"whole words only\"); \
                   endif;",
                  &["whole words only"]);
}

#[test]
fn whitespace_inside_compared_literals_is_ignored() {
    assert_output("new variable name string = \"JohnDoe\";\nif (name == \"John Doe\") then: \
                   Print(\"same\"); endif;",
                  &["same"]);
}

#[test]
fn bare_conditions_name_boolean_flags() {
    assert_output("new variable ready boolean = TRUE;\nif (ready) then: Print(\"go\"); endif;",
                  &["go"]);
    assert_output("new variable ready boolean = FALSE;\nif (ready) then: Print(\"go\"); else perform: \
                   Print(\"wait\"); endif;",
                  &["wait"]);
    assert_output("if (unknown) then: Print(\"go\"); endif;", &[]);
}

#[test]
fn first_true_arm_wins() {
    let src = "new variable x numeric = 2;\nif (x == 1) then:\n    Print(\"one\");\nelse to if (x == 2) \
               resume:\n    Print(\"two\");\nelse to if (x > 0) resume:\n    Print(\"positive\");\nelse \
               perform:\n    Print(\"other\");\nendif;\nPrint(\"after\");";
    assert_output(src, &["two", "after"]);
}

#[test]
fn default_block_runs_when_nothing_matches() {
    assert_output("if (1 > 2) then: Print(\"a\"); else to if (2 > 3) resume: Print(\"b\"); else \
                   perform: Print(\"c\"); endif;",
                  &["c"]);
    assert_output("if (1 > 2) then: Print(\"a\"); endif;", &[]);
    assert_output("if (1 < 2) then: ignore; endif;", &[]);
}

#[test]
fn true_primary_never_evaluates_later_arms() {
    let src = "new variable x numeric = 1;\nif (x == 1) then:\n    Print(\"first\");\nelse to if (== 1) \
               resume:\n    Print(\"second\");\nendif;";
    assert_output(src, &["first"]);

    let run = assert_diagnostic(&src.replace("= 1;", "= 2;"), "Invalid condition");
    assert!(run.output.is_empty());
}

#[test]
fn broken_conditionals_are_skipped() {
    let run = assert_diagnostic("if (1 == 1)\n    Print(\"inside\");\nendif;\nPrint(\"after\");",
                                "Invalid if statement structure");
    assert_eq!(run.output, ["after"]);
}

#[test]
fn blocks_only_run_prints() {
    assert_output("new variable x numeric = 1;\nif (x == 1) then:\n    rename variable x numeric = \
                   5;\n    Print(f\"x=$[x]\");\nendif;",
                  &["x=1"]);
}

#[test]
fn unknown_functions_are_reported() {
    let run = assert_diagnostic("Shout(\"hey\");\nPrint(\"still running\");",
                                "Unknown function 'Shout()'");
    assert_eq!(run.output, ["still running"]);
}

#[test]
fn unknown_functions_inside_conditionals_are_reported() {
    let run = assert_diagnostic("if (1 == 1) then:\n    Print(\"inside\");\n    Foo(\"x\");\nendif;\n\
                                 Print(\"after\");",
                                "Error on line 4: Unknown function 'Foo()'");
    assert_eq!(run.output, ["inside", "after"]);
}

#[test]
fn block_prints_need_a_semicolon() {
    assert_output("if (1 == 1) then: Print(\"a\") Print(\"b\"); endif;", &["b"]);
}

#[test]
fn keywords_can_name_variables() {
    assert_output("new variable to numeric = 1;\nrename variable to numeric = 2;\n\
                   Print(f\"to=$[to]\");\nif (to == 2) then: Print(\"two\"); endif;",
                  &["to=2", "two"]);
    assert_output("new variable then numeric = 3;\nnew variable sum numeric = then * 2;\n\
                   Print(f\"$[sum]\");",
                  &["6"]);
}

#[test]
fn print_requires_an_import() {
    let run = run_with_input("Print(\"hello\");", "");
    assert!(!run.completed);
    assert!(run.output.is_empty());
    assert_eq!(run.diagnostics, ["I do not know what Print is! Write its import."]);
}

#[test]
fn input_requires_an_import() {
    let run = run_with_input("import terminal.Print;\nPrint(\"a\");\nnew variable n numeric = input();",
                             "1\n");
    assert!(!run.completed);
    assert!(run.output.is_empty());
    assert_eq!(run.diagnostics, ["I do not know what input is! Write its import."]);
}

#[test]
fn unterminated_statements_abort_the_run() {
    let run = run("Print(\"a\");\nPrint(\"b\")  ");
    assert!(!run.completed);
    assert!(run.output.is_empty());
    assert_eq!(run.diagnostics.len(), 1);
    assert!(run.diagnostics[0].starts_with("Error on line 3: There is no ending after character 10."));
}

#[test]
fn unknown_characters_only_reject_their_statement() {
    let run = assert_diagnostic("Print(\"before\");\nnew variable s string = 'hi';\nPrint(f\"after $[s]\");",
                                "Error on line 3: String value must be enclosed in quotes, found 'hi'.");
    assert_eq!(run.output, ["before", "after $[s]"]);
    assert_eq!(run.diagnostics.len(), 1);

    let run = self::run("Print(\"before\");\nnew variable a numeric = 1;\nif (a == 1 && a == 2) then: \
                   Print(\"both\"); else perform: Print(\"text\"); endif;\nPrint(\"after\");");
    assert!(run.completed);
    assert!(run.diagnostics.is_empty(), "{:?}", run.diagnostics);
    assert_eq!(run.output, ["before", "text", "after"]);
}

#[test]
fn numeric_input_retries_until_valid() {
    let run = run_with_input("import terminal.*;\nnew variable n numeric = input(\"Number: \");\nPrint(f\"got \
                              $[n]\");",
                             "abc\n4.5\n42\n");
    assert_eq!(run.output, ["got 42"]);
    assert_eq!(run.diagnostics,
               ["Please enter a valid integer number.", "Please enter a valid integer number."]);
    assert_eq!(run.prompts, "Number: Number: Number: ");
}

#[test]
fn input_values_follow_their_type() {
    let src = "import terminal.*;\nnew variable ok boolean = input();\nnew variable name string = \
               input(\"Name? \");\nif (ok) then: Print(\"ok\"); endif;\nPrint(f\"[$[name]]\");";
    let run = run_with_input(src, "yes\ntrue\n  Ann \n");
    assert_eq!(run.output, ["ok", "[  Ann ]"]);
    assert_eq!(run.diagnostics, ["Please enter TRUE/FALSE or true/false."]);
}

#[test]
fn closed_input_rejects_the_statement() {
    let run = run_with_input("import terminal.*;\nnew variable n floating = input();\nPrint(f\"$[n]\");",
                             "x\n");
    assert_eq!(run.output, ["$[n]"]);
    assert_eq!(run.diagnostics.last().map(String::as_str),
               Some("Error on line 2: Input ended before a valid value was entered."));
}

#[test]
fn comment_stripping_is_idempotent_and_keeps_lines() {
    let src = "@rem header\nimport terminal.*; ## trailing\n\"\"\"\nblock\ncomment\n\"\"\"\n@remLine(a (b) \
               c)new variable x numeric = 1;\nnew variable x numeric = 2;\nPrint(\"## kept\");";
    let clean = strip_comments(src);
    assert_eq!(strip_comments(&clean), clean);
    assert_eq!(clean.lines().count(), src.lines().count());

    let run = run_with_input(src, "");
    assert_eq!(run.output, ["## kept"]);
    assert_eq!(run.diagnostics, ["Error on line 8: Variable 'x' is already declared."]);
}

#[test]
fn comment_markers_inside_literals_are_text() {
    assert_output("Print(\"@rem not a comment\");\nPrint(f\"a ## b\");",
                  &["@rem not a comment", "a ## b"]);
}
