//! Splits bibliography text into classified lines. The grammar understood here is deliberately
//! narrow (see the crate docs): every meaningful construct of an entry sits on a line of its own,
//! so a line is the unit the parser consumes.

pub mod lines;

use lines::BibLine;

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source: source.lines(),
            line: 0,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = BibLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.source.next()?;
        self.line += 1;
        Some(BibLine::new(text, self.line))
    }
}
