//! Built-in demo program used when no file is given.

pub const PROGRAM: &str = "\
% Unification as a predicate.
=(X, X).

% List append over cons/nil.
app(nil, L, L).
app(cons(H, T), L, cons(H, R)) :- app(T, L, R).

% A small family tree.
parent(tom, bob).
parent(bob, ann).
parent(bob, pat).
ancestor(X, Y) :- parent(X, Y).
ancestor(X, Z) :- parent(X, Y), ancestor(Y, Z).
";
