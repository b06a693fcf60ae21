//! Terminal survey form: prompts each question and collects 0-6 ratings

use crate::questionnaire::Questionnaire;
use crate::{Response, MAX_RATING, MIN_RATING};
use std::io::{self, BufRead, Write};

pub const CONSENT_STATEMENT: &str = "Your answers are stored anonymously for research on student burnout. \
Participation is voluntary and you may stop at any time.";

/// Line-oriented form over any reader/writer pair (stdin/stdout in the CLI)
pub struct SurveyForm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SurveyForm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the survey was complete",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Show the consent statement and ask for an explicit yes
    pub fn ask_consent(&mut self) -> io::Result<bool> {
        writeln!(self.output, "{}", CONSENT_STATEMENT)?;
        write!(self.output, "Do you consent to participate? [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    /// Ask every question in order. Invalid answers are asked again.
    pub fn collect(&mut self, questionnaire: &Questionnaire) -> io::Result<Response> {
        writeln!(self.output, "{}", questionnaire.title)?;
        writeln!(self.output, "{}", questionnaire.instructions)?;

        let mut response = Response::default();
        for section in &questionnaire.sections {
            writeln!(self.output)?;
            writeln!(self.output, "{}", section.subscale)?;
            let ratings = response.ratings_mut(section.subscale);
            for question in &section.questions {
                let rating = self.ask_rating(question)?;
                ratings.push(rating);
            }
        }
        Ok(response)
    }

    fn ask_rating(&mut self, question: &str) -> io::Result<i32> {
        loop {
            write!(
                self.output,
                "  {} [{}-{}] ",
                question, MIN_RATING, MAX_RATING
            )?;
            self.output.flush()?;
            let line = self.read_line()?;
            match line.parse::<i32>() {
                Ok(v) if (MIN_RATING..=MAX_RATING).contains(&v) => return Ok(v),
                _ => writeln!(
                    self.output,
                    "  Please enter a whole number from {} to {}.",
                    MIN_RATING, MAX_RATING
                )?,
            }
        }
    }
}
