use comment_continue::{Editor, Position, handle_continuation};
use comment_continue_classify::LineTokenizer;
use comment_continue_lang::CommentConfig;

fn main() {
    // The host checks the active language before routing the key press.
    let language = CommentConfig::line_and_block("//", "/*", "*/");
    assert!(language.supports_star_continuation());

    // Line break pressed right after an unclosed opener.
    let mut editor = Editor::new("/* release notes");
    editor.set_cursor(Position::new(0, 16));

    let result = handle_continuation(&mut editor, &LineTokenizer::new());
    assert!(result.is_handled());
    assert_eq!(editor.text(), "/* release notes\n * \n */");
    assert_eq!(editor.cursor_position(), Position::new(1, 3));

    println!("{}", editor.text());
}
