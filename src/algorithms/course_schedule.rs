//! Course schedule (Kahn's topological sort)
//!
//! A prerequisite pair `[a, b]` means course `b` must be taken before `a`,
//! i.e. the edge `b -> a`. Courses with in-degree zero are enqueued in id
//! order; each dequeue relaxes the outgoing edges in the order the pairs were
//! given. If the queue drains before every course completes, the remaining
//! courses sit on a cycle.

use crate::trace::view::format_list;
use crate::trace::{Highlight, SnapshotView, StepKind, Trace, TraceRecorder};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    Init,
    Enqueue,
    Dequeue,
    Relax,
    Complete,
    Done,
}

impl StepKind for ScheduleKind {
    fn label(&self) -> &'static str {
        match self {
            ScheduleKind::Init => "init",
            ScheduleKind::Enqueue => "enqueue",
            ScheduleKind::Dequeue => "dequeue",
            ScheduleKind::Relax => "relax",
            ScheduleKind::Complete => "complete",
            ScheduleKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseState {
    Idle,
    /// In the queue
    Ready,
    Processing,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Success,
    Cycle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    /// Edges as `(from, to)`, in input order
    pub edges: Vec<(usize, usize)>,
    pub in_degree: Vec<usize>,
    pub states: Vec<CourseState>,
    /// Front of the queue first
    pub queue: Vec<usize>,
    pub order: Vec<usize>,
    pub outcome: Outcome,
}

pub type ScheduleTrace = Trace<ScheduleKind, ScheduleSnapshot>;

struct Kahn {
    edges: Vec<(usize, usize)>,
    in_degree: Vec<usize>,
    states: Vec<CourseState>,
    queue: VecDeque<usize>,
    order: Vec<usize>,
    outcome: Outcome,
}

impl Kahn {
    fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            edges: self.edges.clone(),
            in_degree: self.in_degree.clone(),
            states: self.states.clone(),
            queue: self.queue.iter().copied().collect(),
            order: self.order.clone(),
            outcome: self.outcome,
        }
    }

    fn enqueue(&mut self, course: usize) {
        self.states[course] = CourseState::Ready;
        self.queue.push_back(course);
    }
}

/// Build the trace for deciding whether all `num_courses` courses can be
/// finished under `prerequisites`
///
/// Pairs must already be range-checked against `num_courses`.
pub fn course_schedule(num_courses: usize, prerequisites: &[(usize, usize)]) -> ScheduleTrace {
    let mut rec = TraceRecorder::new("course-schedule");
    let edges: Vec<(usize, usize)> = prerequisites.iter().map(|&(a, b)| (b, a)).collect();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); num_courses];
    let mut in_degree = vec![0; num_courses];
    for &(from, to) in &edges {
        adjacency[from].push(to);
        in_degree[to] += 1;
    }

    let mut kahn = Kahn {
        edges,
        in_degree,
        states: vec![CourseState::Idle; num_courses],
        queue: VecDeque::new(),
        order: Vec::new(),
        outcome: Outcome::Running,
    };

    rec.emit(
        ScheduleKind::Init,
        format!(
            "{} course(s), {} prerequisite edge(s); in-degrees {}",
            num_courses,
            kahn.edges.len(),
            format_list(&kahn.in_degree)
        ),
    )
    .snapshot(kahn.snapshot());

    for course in 0..num_courses {
        if kahn.in_degree[course] == 0 {
            kahn.enqueue(course);
            rec.emit(
                ScheduleKind::Enqueue,
                format!("Course {} has no prerequisites; enqueue it", course),
            )
            .highlight(Highlight::Node(course))
            .snapshot(kahn.snapshot());
        }
    }

    while let Some(course) = kahn.queue.pop_front() {
        kahn.states[course] = CourseState::Processing;
        rec.emit(
            ScheduleKind::Dequeue,
            format!("Dequeue course {}", course),
        )
        .highlight(Highlight::Node(course))
        .snapshot(kahn.snapshot());

        for &next in &adjacency[course] {
            kahn.in_degree[next] -= 1;
            let description = format!(
                "Edge {} -> {}: in-degree of {} drops to {}",
                course, next, next, kahn.in_degree[next]
            );
            rec.emit(ScheduleKind::Relax, description)
                .highlights([Highlight::Node(course), Highlight::Edge(course, next)])
                .snapshot(kahn.snapshot());

            if kahn.in_degree[next] == 0 {
                kahn.enqueue(next);
                rec.emit(
                    ScheduleKind::Enqueue,
                    format!("Course {} is now unblocked; enqueue it", next),
                )
                .highlight(Highlight::Node(next))
                .snapshot(kahn.snapshot());
            }
        }

        kahn.states[course] = CourseState::Completed;
        kahn.order.push(course);
        rec.emit(
            ScheduleKind::Complete,
            format!(
                "Course {} complete; order so far {}",
                course,
                format_list(&kahn.order)
            ),
        )
        .highlight(Highlight::Node(course))
        .snapshot(kahn.snapshot());
    }

    let description = if kahn.order.len() == num_courses {
        kahn.outcome = Outcome::Success;
        format!(
            "All {} course(s) can be finished in order {}",
            num_courses,
            format_list(&kahn.order)
        )
    } else {
        kahn.outcome = Outcome::Cycle;
        let blocked: Vec<usize> = (0..num_courses)
            .filter(|c| kahn.states[*c] != CourseState::Completed)
            .collect();
        format!(
            "Queue drained with {} of {} complete; cycle among {}",
            kahn.order.len(),
            num_courses,
            format_list(&blocked)
        )
    };
    let blocked_highlights: Vec<Highlight> = (0..num_courses)
        .filter(|c| kahn.states[*c] != CourseState::Completed)
        .map(Highlight::Node)
        .collect();
    rec.emit(ScheduleKind::Done, description)
        .highlights(blocked_highlights)
        .snapshot(kahn.snapshot());

    rec.finish()
}

impl SnapshotView for ScheduleSnapshot {
    fn render(&self) -> Vec<String> {
        let mut lines = vec!["course  in-degree  state".to_string()];
        for (course, (degree, state)) in self.in_degree.iter().zip(&self.states).enumerate() {
            let state = match state {
                CourseState::Idle => "idle",
                CourseState::Ready => "ready",
                CourseState::Processing => "processing",
                CourseState::Completed => "completed",
            };
            lines.push(format!("{:>6}  {:>9}  {}", course, degree, state));
        }
        let edges: Vec<String> = self
            .edges
            .iter()
            .map(|(from, to)| format!("{}->{}", from, to))
            .collect();
        lines.push(format!("edges  {}", edges.join(" ")));
        lines.push(format!("queue  {}", format_list(&self.queue)));
        lines.push(format!("order  {}", format_list(&self.order)));
        lines
    }

    fn answer(&self) -> String {
        match self.outcome {
            Outcome::Running => format!("{} complete", self.order.len()),
            Outcome::Success => "can finish".to_string(),
            Outcome::Cycle => "cycle detected".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(trace: &ScheduleTrace) -> Outcome {
        trace.last().unwrap().snapshot.outcome
    }

    #[test]
    fn test_simple_chain_succeeds() {
        let trace = course_schedule(2, &[(1, 0)]);
        assert_eq!(outcome(&trace), Outcome::Success);
        assert_eq!(trace.last().unwrap().snapshot.order, vec![0, 1]);
    }

    #[test]
    fn test_two_cycle_fails() {
        let trace = course_schedule(2, &[(1, 0), (0, 1)]);
        let last = trace.last().unwrap();

        assert_eq!(outcome(&trace), Outcome::Cycle);
        assert!(last.snapshot.order.is_empty());
        assert_eq!(last.highlights, vec![Highlight::Node(0), Highlight::Node(1)]);
        // Init then Done: nothing ever reaches in-degree 0
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_only_running_before_done() {
        let trace = course_schedule(4, &[(1, 0), (2, 0), (3, 1), (3, 2)]);
        for step in trace.iter().take(trace.len() - 1) {
            assert_eq!(step.snapshot.outcome, Outcome::Running);
        }
        assert_eq!(outcome(&trace), Outcome::Success);
        assert_eq!(trace.last().unwrap().snapshot.order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_queue_matches_ready_states() {
        let trace = course_schedule(4, &[(1, 0), (2, 1), (3, 0)]);
        for step in &trace {
            let snap = &step.snapshot;
            for (course, state) in snap.states.iter().enumerate() {
                assert_eq!(
                    *state == CourseState::Ready,
                    snap.queue.contains(&course),
                    "step {} course {}",
                    step.index,
                    course
                );
            }
        }
    }

    #[test]
    fn test_relax_highlights_the_edge() {
        let trace = course_schedule(2, &[(1, 0)]);
        let relax = trace.iter().find(|s| s.kind == ScheduleKind::Relax).unwrap();
        assert!(relax.highlights.contains(&Highlight::Edge(0, 1)));
        assert_eq!(relax.snapshot.in_degree, vec![0, 0]);
    }

    #[test]
    fn test_no_courses() {
        let trace = course_schedule(0, &[]);
        assert_eq!(trace.len(), 2);
        assert_eq!(outcome(&trace), Outcome::Success);
    }
}
