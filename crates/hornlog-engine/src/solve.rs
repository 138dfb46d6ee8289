//! The resolver: depth-first SLD search over the clause database.
//!
//! The search state is a chain of frames, one per chosen clause. A
//! forward step renames a candidate rule, unifies its head with the
//! leftmost pending goal, and pushes a frame whose goal list is the
//! rule's body prepended to the rest. When candidates run out the top
//! frame pops: its trail unwinds newest-first, its scopes are released,
//! and the frame below retries from its stored bookmark. Everything is
//! pull-driven: [`Solve::next_answer`] returns at each solution and
//! resumes past it on the next call.

use hornlog_core::{Interner, Rule, ScopeId, ScopeMark, Store, Symbol, Term, TermDisplay, Trail};

use crate::database::{Bookmark, Database};
use crate::error::RuntimeError;
use crate::trace::{NoopTracer, Tracer};
use crate::unify::unify;

/// Limits on a single query's search. The engine has no way to detect
/// non-termination (left recursion, unbounded generation), so both knobs
/// default high rather than unlimited.
#[derive(Clone, Copy, Debug)]
pub struct StepLimits {
    /// Maximum candidate resolutions attempted (default: 1,000,000).
    pub step_fuel: u64,
    /// Maximum execution-stack depth (default: 4,096).
    pub depth_limit: u32,
}

impl Default for StepLimits {
    fn default() -> Self {
        Self {
            step_fuel: 1_000_000,
            depth_limit: 4096,
        }
    }
}

/// One level of the execution stack.
///
/// A frame owns everything its forward step created: the trail of the
/// unification that entered it, and (via the scope watermark) the fresh
/// scopes allocated since. Popping the frame unwinds the one and releases
/// the other, restoring the store to the state it had when the frame was
/// entered.
#[derive(Debug)]
struct Frame {
    /// Frame below; `None` for the root.
    prev: Option<Box<Frame>>,
    /// Database position just past the clause that matched here; where a
    /// retry of this goal resumes.
    resume: Bookmark,
    /// Bindings made by the unification that entered this frame.
    trail: Trail,
    /// Terms still to prove, leftmost first.
    goals: Vec<Term>,
    /// Scope-arena watermark at entry.
    mark: ScopeMark,
    depth: u32,
}

/// Outcome of one forward step.
enum Step {
    /// A candidate matched; the new top frame.
    Forward(Box<Frame>),
    /// Candidates exhausted; the frame comes back to be popped.
    Stuck(Box<Frame>),
}

/// One solution: the query's variables that the search bound, rendered
/// through the store, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub bindings: Vec<(String, String)>,
}

impl Answer {
    /// No variables were bound; a plain "yes".
    pub fn is_ground(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// An in-progress search for answers to one query.
///
/// Pull [`next_answer`](Solve::next_answer) repeatedly; `Ok(None)` means
/// the search tree is exhausted. Dropping the search releases every scope
/// the query allocated, so abandoning it early needs no rewinding.
pub struct Solve<'a, T: Tracer = NoopTracer> {
    db: &'a Database,
    store: &'a mut Store,
    interner: &'a Interner,
    /// Top of the frame chain; `None` once the root has popped.
    state: Option<Box<Frame>>,
    /// Where the next forward step resumes in the database.
    resume: Bookmark,
    /// Query variables in first-occurrence order.
    vars: Vec<Symbol>,
    /// Scope of the synthetic query rule; holds the answer bindings.
    query_scope: ScopeId,
    /// Store watermark from before the query existed; restored on drop.
    base: ScopeMark,
    fuel: u64,
    limits: StepLimits,
    tracer: T,
    /// True until the first `next_answer` call.
    fresh: bool,
}

impl<'a, T: Tracer> Solve<'a, T> {
    pub(crate) fn new(
        db: &'a Database,
        store: &'a mut Store,
        interner: &'a Interner,
        query: Rule,
        vars: Vec<Symbol>,
        base: ScopeMark,
        limits: StepLimits,
        tracer: T,
    ) -> Self {
        let query_scope = query.scope;
        let root = Box::new(Frame {
            prev: None,
            resume: Bookmark::START,
            trail: Trail::new(),
            goals: query.body,
            mark: store.mark(),
            depth: 0,
        });
        Self {
            db,
            store,
            interner,
            state: Some(root),
            resume: Bookmark::START,
            vars,
            query_scope,
            base,
            fuel: limits.step_fuel,
            limits,
            tracer,
            fresh: true,
        }
    }

    /// Produce the next answer, or `Ok(None)` when the search tree is
    /// exhausted. Re-entering after an answer resumes past it.
    pub fn next_answer(&mut self) -> Result<Option<Answer>, RuntimeError> {
        if self.fresh {
            self.fresh = false;
            // A query with no goals at all is vacuously proven once.
            if self.state.as_ref().is_some_and(|frame| frame.goals.is_empty()) {
                return Ok(Some(self.answer()));
            }
        }

        loop {
            let Some(frame) = self.state.take() else {
                // Search exhausted.
                return Ok(None);
            };

            if frame.goals.is_empty() {
                // A previously returned answer; move past it.
                self.resume = frame.resume;
                self.state = self.pop(frame);
                continue;
            }

            match self.take_step(frame)? {
                Step::Forward(next) => {
                    let solved = next.goals.is_empty();
                    let depth = next.depth;
                    self.resume = Bookmark::START;
                    self.state = Some(next);
                    if solved {
                        self.tracer.trace_answer(depth);
                        return Ok(Some(self.answer()));
                    }
                    // Keep descending.
                }
                Step::Stuck(frame) => {
                    self.tracer.trace_exhausted(frame.depth);
                    self.resume = frame.resume;
                    self.state = self.pop(frame);
                }
            }
        }
    }

    /// Try one forward step for the frame's first pending goal, starting
    /// from the current resume bookmark.
    fn take_step(&mut self, frame: Box<Frame>) -> Result<Step, RuntimeError> {
        let goal = frame
            .goals
            .first()
            .expect("forward step on a frame with no pending goals")
            .clone();

        if frame.depth >= self.limits.depth_limit {
            return Err(RuntimeError::DepthLimitExceeded(self.limits.depth_limit));
        }

        self.tracer
            .trace_goal(self.store, self.interner, frame.depth, &goal);

        let mut bookmark = self.resume;
        loop {
            let (template, after) = self.db.next(bookmark);
            let Some(template) = template else {
                return Ok(Step::Stuck(frame));
            };

            if self.fuel == 0 {
                return Err(RuntimeError::StepLimitExceeded(self.limits.step_fuel));
            }
            self.fuel -= 1;

            let pre = self.store.mark();
            let copy = template.rename(self.store);
            match unify(self.store, &copy.head, &goal) {
                Some(trail) => {
                    let depth = frame.depth + 1;
                    self.tracer
                        .trace_enter(self.store, self.interner, depth, bookmark.index(), &copy.head);
                    let Rule { body, .. } = copy;
                    let mut goals = body;
                    goals.extend_from_slice(&frame.goals[1..]);
                    return Ok(Step::Forward(Box::new(Frame {
                        prev: Some(frame),
                        resume: after,
                        trail,
                        goals,
                        mark: pre,
                        depth,
                    })));
                }
                None => {
                    // The failed copy is unreachable; reclaim its scope.
                    self.store.release(pre);
                    bookmark = after;
                }
            }
        }
    }

    /// Rewind the top frame: unwind its trail newest-first, release its
    /// scopes, and return the frame below.
    fn pop(&mut self, frame: Box<Frame>) -> Option<Box<Frame>> {
        self.tracer.trace_backtrack(frame.depth);
        let Frame {
            prev, trail, mark, ..
        } = *frame;
        self.store.undo(trail);
        self.store.release(mark);
        prev
    }

    /// Snapshot the query scope's bindings for the caller.
    fn answer(&self) -> Answer {
        let scope = self.store.scope(self.query_scope);
        let bindings = self
            .vars
            .iter()
            .filter(|&&name| scope.get(name).is_some())
            .map(|&name| {
                let var = Term::var(name, self.query_scope);
                (
                    self.interner.resolve(name).to_owned(),
                    TermDisplay::new(self.store, self.interner, &var).to_string(),
                )
            })
            .collect();
        Answer { bindings }
    }
}

impl<T: Tracer> Drop for Solve<'_, T> {
    fn drop(&mut self) {
        // Every scope the query allocated (the query rule's own scope and
        // all rule copies) sits above the base watermark, and bindings only
        // ever land in query-allocated scopes, so truncation alone restores
        // the session store.
        self.store.release(self.base);
    }
}
