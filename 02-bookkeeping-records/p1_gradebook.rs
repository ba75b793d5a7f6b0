// Pattern 1: Structured Records Instead of Nested Maps
//
// A gradebook could be kept as a map of maps of tuples:
// student name -> subject name -> (score, weight). Every layer of that
// nesting leaks into every call site, and a positional tuple says nothing
// about which element is which. Named record types keep the bookkeeping
// readable as requirements grow, so the structured form is used from the
// start here.
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum GradebookError {
    #[error("no student named `{0}`")]
    UnknownStudent(String),
}

// One graded exercise. An exam might carry weight 0.80 while a pop quiz
// carries 0.05; unweighted grading is just weight 1.0 everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Score {
    value: f64,
    weight: f64,
}

#[derive(Debug, Default)]
struct Subject {
    scores: Vec<Score>,
}

impl Subject {
    fn report_score(&mut self, value: f64, weight: f64) {
        self.scores.push(Score { value, weight });
    }

    // Weighted mean of the scores; an empty subject reads as zero
    fn average_score(&self) -> f64 {
        let total_weight: f64 = self.scores.iter().map(|s| s.weight).sum();
        if total_weight == 0.0 {
            return 0.0;
        }

        let total: f64 = self.scores.iter().map(|s| s.value * s.weight).sum();
        total / total_weight
    }
}

#[derive(Debug, Default)]
struct Student {
    subjects: HashMap<String, Subject>,
}

impl Student {
    fn subject(&mut self, name: &str) -> &mut Subject {
        self.subjects.entry(name.to_string()).or_default()
    }

    // Each subject counts equally toward the student's overall average
    fn average_score(&self) -> f64 {
        if self.subjects.is_empty() {
            return 0.0;
        }

        let total: f64 = self.subjects.values().map(|s| s.average_score()).sum();
        total / self.subjects.len() as f64
    }
}

#[derive(Debug, Default)]
struct Gradebook {
    students: HashMap<String, Student>,
}

impl Gradebook {
    fn new() -> Self {
        Self::default()
    }

    // Students are registered on first use; names aren't known in advance
    fn student(&mut self, name: &str) -> &mut Student {
        self.students.entry(name.to_string()).or_default()
    }

    fn average_score(&self, name: &str) -> Result<f64, GradebookError> {
        self.students
            .get(name)
            .map(Student::average_score)
            .ok_or_else(|| GradebookError::UnknownStudent(name.to_string()))
    }
}

fn main() {
    let mut book = Gradebook::new();

    // Usage: Record weighted scores across two subjects
    println!("=== recording scores ===");
    let albert = book.student("Albert Einstein");

    let math = albert.subject("Math");
    math.report_score(75.0, 0.05);
    math.report_score(65.0, 0.15);
    math.report_score(70.0, 0.80);

    let gym = albert.subject("Gym");
    gym.report_score(100.0, 0.40);
    gym.report_score(85.0, 0.60);

    for (name, subject) in &book.students["Albert Einstein"].subjects {
        println!("{}: {} scores recorded", name, subject.scores.len());
    }

    // Usage: Per-subject and overall weighted averages
    println!("\n=== averages ===");
    let albert = &book.students["Albert Einstein"];
    for (name, subject) in &albert.subjects {
        println!("{}: {:.2}", name, subject.average_score());
    }
    match book.average_score("Albert Einstein") {
        Ok(average) => println!("Overall: {:.2}", average),
        Err(e) => eprintln!("lookup failed: {}", e),
    }

    // Usage: Asking about an unregistered student is an error, not a panic
    println!("\n=== unknown student ===");
    match book.average_score("Isaac Newton") {
        Ok(average) => println!("Overall: {:.2}", average),
        Err(e) => eprintln!("lookup failed: {}", e),
    }

    println!("\nGradebook example completed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_average_per_subject() {
        let mut subject = Subject::default();
        subject.report_score(75.0, 0.05);
        subject.report_score(65.0, 0.15);
        subject.report_score(70.0, 0.80);

        assert!((subject.average_score() - 69.5).abs() < 1e-9);
    }

    #[test]
    fn unweighted_scores_use_weight_one() {
        let mut subject = Subject::default();
        subject.report_score(90.0, 1.0);
        subject.report_score(80.0, 1.0);
        subject.report_score(50.0, 1.0);
        subject.report_score(10.0, 1.0);

        assert!((subject.average_score() - 57.5).abs() < 1e-9);
    }

    #[test]
    fn student_average_spans_subjects() {
        let mut book = Gradebook::new();
        let student = book.student("Albert Einstein");

        let math = student.subject("Math");
        math.report_score(75.0, 0.05);
        math.report_score(65.0, 0.15);
        math.report_score(70.0, 0.80);

        let gym = student.subject("Gym");
        gym.report_score(100.0, 0.40);
        gym.report_score(85.0, 0.60);

        // Math 69.5, Gym 91.0
        let average = book.average_score("Albert Einstein").unwrap();
        assert!((average - 80.25).abs() < 1e-9);
    }

    #[test]
    fn unknown_student_is_an_error() {
        let book = Gradebook::new();
        assert_eq!(
            book.average_score("Isaac Newton"),
            Err(GradebookError::UnknownStudent("Isaac Newton".to_string()))
        );
    }

    #[test]
    fn empty_subject_reads_as_zero() {
        let subject = Subject::default();
        assert_eq!(subject.average_score(), 0.0);
    }
}
