use crate::token::Span;
use ariadne::{Color, Label, Report, ReportKind, Source};

const ARIADNE_MSG: &str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &str = "Write into buffer should not fail.";

/// Sink for lexical, syntax and runtime diagnostics.
///
/// The lexer, the parser and the runner only ever hand messages to a reporter; how they are
/// displayed is up to the implementation.
pub trait Reporter {
    fn report(&mut self, line: u32, message: &str);

    /// Reports a message that can be pinned to a region of the source.
    fn report_at(&mut self, line: u32, span: Span, message: &str) {
        let _ = span;
        self.report(line, message);
    }
}

pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, line: u32, message: &str) {
        eprintln!("[line {line}] Error: {message}");
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct BufferedReporter {
    diagnostics: Vec<(u32, String)>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[(u32, String)] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_data(self) -> String {
        let mut buffer = String::new();
        for (line, message) in self.diagnostics {
            buffer.push_str(&format!("[line {line}] Error: {message}\n"));
        }
        buffer
    }
}

impl Reporter for BufferedReporter {
    fn report(&mut self, line: u32, message: &str) {
        self.diagnostics.push((line, message.into()));
    }
}

/// Renders diagnostics with the offending source underlined.
pub struct PrettyReporter<'src> {
    text: &'src str,
    name: &'src str,
}

impl<'src> PrettyReporter<'src> {
    pub fn new(text: &'src str, name: &'src str) -> Self {
        Self { text, name }
    }

    fn render(&self, span: Span, message: &str) -> String {
        let mut output = std::io::Cursor::new(Vec::new());
        // An empty span at the end of input still needs something to point at.
        let range = if span.is_empty() {
            span.start as usize..span.end() + 1
        } else {
            span.range()
        };
        Report::build(ReportKind::Error, (self.name, range.clone()))
            .with_message(message)
            .with_label(
                Label::new((self.name, range))
                    .with_message(message)
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((self.name, Source::from(self.text)), &mut output)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(output.into_inner()).expect(ARIADNE_MSG)
    }
}

impl Reporter for PrettyReporter<'_> {
    fn report(&mut self, line: u32, message: &str) {
        eprintln!("[line {line}] Error: {message}");
    }

    fn report_at(&mut self, _line: u32, span: Span, message: &str) {
        eprint!("{}", self.render(span, message));
    }
}
