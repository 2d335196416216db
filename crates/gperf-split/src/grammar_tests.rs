use indoc::indoc;
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::error::{Block, ParseError};
use crate::grammar::{lookup_function_name, GrammarBlocks};

const RTOS_GRAMMAR: &str = indoc! {"
    %{
    typedef enum {
    \trtos_freertos = 0,
    \trtos_invalid = -1
    } rtos_option_t;
    %}
    struct rtos_lookup_entry { char * name; rtos_option_t option; };
    %readonly-tables
    %define lookup-function-name rtos_in_word_set
    %%
    freertos, rtos_freertos
    %%
"};

#[test]
fn test_kind_grammar() {
    let grammar = "%{\ntypedef enum {A,B} kind_t;\n%}\nstruct rec { kind_t k; };\n%%\n%define lookup-function-name lookup_rec\n";
    let blocks = GrammarBlocks::parse(grammar).expect("grammar is well formed");
    assert_eq!(blocks.prologue, "\ntypedef enum {A,B} kind_t;\n");
    assert_eq!(blocks.record_definition, "\nstruct rec { kind_t k; };\n");
    assert_eq!(blocks.lookup_function, "lookup_rec");
}

#[test]
fn test_directives_stay_in_record_block() {
    // gperf options between %} and %% are part of the verbatim block
    let blocks = GrammarBlocks::parse(RTOS_GRAMMAR).unwrap();
    assert_eq!(
        blocks.prologue,
        "\ntypedef enum {\n\trtos_freertos = 0,\n\trtos_invalid = -1\n} rtos_option_t;\n"
    );
    assert_eq!(
        blocks.record_definition,
        "\nstruct rtos_lookup_entry { char * name; rtos_option_t option; };\n%readonly-tables\n%define lookup-function-name rtos_in_word_set\n"
    );
    assert_eq!(blocks.lookup_function, "rtos_in_word_set");
}

#[test]
fn test_blocks_keep_whitespace() {
    let grammar = "%{  \n\n  A  %}\t B \t%%\n%define lookup-function-name f\n";
    let blocks = GrammarBlocks::parse(grammar).unwrap();
    assert_eq!(blocks.prologue, "  \n\n  A  ");
    assert_eq!(blocks.record_definition, "\t B \t");
}

#[test]
fn test_parse_is_repeatable() {
    assert_eq!(
        GrammarBlocks::parse(RTOS_GRAMMAR).unwrap(),
        GrammarBlocks::parse(RTOS_GRAMMAR).unwrap()
    );
}

#[test_case("typedef int x;\n%%\n%define lookup-function-name f\n", Block::Prologue, "%{" ; "no prologue start")]
#[test_case("%{ typedef int x;\n%%\n%define lookup-function-name f\n", Block::Prologue, "%}" ; "no prologue end")]
#[test_case("%{ A %} struct r { int a; };\n%define lookup-function-name f\n", Block::RecordDefinition, "%%" ; "no rules separator")]
#[test_case("%% %{ A %} struct r {};\n%define lookup-function-name f\n", Block::RecordDefinition, "%%" ; "separator before prologue")]
fn test_missing_marker(grammar: &str, block: Block, marker: &'static str) {
    assert_eq!(
        GrammarBlocks::parse(grammar),
        Err(ParseError::MissingMarker { block, marker })
    );
}

#[test]
fn test_missing_directive() {
    let grammar = "%{ A %} struct r { int a; }; %%\n";
    assert_eq!(GrammarBlocks::parse(grammar), Err(ParseError::MissingDirective));
}

#[test_case("%define lookup-function-name   find_it  \n", "find_it" ; "padded")]
#[test_case("%define lookup-function-name find_it\r\n", "find_it" ; "crlf")]
#[test_case("%define lookup-function-name find_it", "find_it" ; "last line")]
#[test_case("%define lookup-function-name find_it\n%define lookup-function-name other\n", "find_it" ; "first wins")]
fn test_lookup_function_name(grammar: &str, expected: &str) {
    assert_eq!(lookup_function_name(grammar).as_deref(), Ok(expected));
}

#[test]
fn test_empty_lookup_function_name() {
    assert_eq!(
        lookup_function_name("%define lookup-function-name   \nfoo"),
        Err(ParseError::EmptyFunctionName)
    );
}
