//! Before/after scenario hooks with ordering and tag filters.

use std::fmt;
use tracing::debug;

pub const DEFAULT_ORDER: u32 = 10000;

type HookFn<W> = Box<dyn Fn(&mut W)>;

struct Hook<W> {
    name: &'static str,
    order: u32,
    filters: Vec<Vec<String>>,
    run: HookFn<W>,
}

impl<W> Hook<W> {
    fn applies_to(&self, tags: &[String]) -> bool {
        self.filters.iter().all(|alternatives| {
            alternatives
                .iter()
                .any(|wanted| tags.iter().any(|tag| bare_tag(tag) == wanted.as_str()))
        })
    }
}

pub struct Hooks<W> {
    before: Vec<Hook<W>>,
    after: Vec<Hook<W>>,
}

impl<W> Default for Hooks<W> {
    fn default() -> Self {
        Self {
            before: vec![],
            after: vec![],
        }
    }
}

impl<W> Hooks<W> {
    /// Each filter is a comma-separated list of alternative tags and every filter must match.
    /// A filter naming no tag at all places no restriction.
    pub fn before(
        mut self,
        name: &'static str,
        order: u32,
        filters: &[&str],
        run: impl Fn(&mut W) + 'static,
    ) -> Self {
        self.before.push(hook(name, order, filters, run));
        self
    }

    pub fn after(
        mut self,
        name: &'static str,
        order: u32,
        filters: &[&str],
        run: impl Fn(&mut W) + 'static,
    ) -> Self {
        self.after.push(hook(name, order, filters, run));
        self
    }

    /// Runs the before hooks applicable to a scenario with the given tags.
    /// Returns the names of the hooks that ran.
    pub fn run_before<T: AsRef<str>>(&self, tags: &[T], world: &mut W) -> Vec<&'static str> {
        let mut hooks: Vec<_> = self.before.iter().collect();
        hooks.sort_by_key(|hook| hook.order);
        run_applicable(hooks, tags, world)
    }

    pub fn run_after<T: AsRef<str>>(&self, tags: &[T], world: &mut W) -> Vec<&'static str> {
        let mut hooks: Vec<_> = self.after.iter().collect();
        hooks.sort_by_key(|hook| std::cmp::Reverse(hook.order));
        run_applicable(hooks, tags, world)
    }
}

impl<W> fmt::Debug for Hooks<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before", &hook_names(&self.before))
            .field("after", &hook_names(&self.after))
            .finish()
    }
}

fn hook<W>(
    name: &'static str,
    order: u32,
    filters: &[&str],
    run: impl Fn(&mut W) + 'static,
) -> Hook<W> {
    let filters: Vec<Vec<String>> = filters
        .iter()
        .map(|filter| {
            filter
                .split(',')
                .map(bare_tag)
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .filter(|alternatives| !alternatives.is_empty())
        .collect();
    Hook {
        name,
        order,
        filters,
        run: Box::new(run),
    }
}

fn run_applicable<W, T: AsRef<str>>(
    hooks: Vec<&Hook<W>>,
    tags: &[T],
    world: &mut W,
) -> Vec<&'static str> {
    let tags: Vec<String> = tags.iter().map(|tag| tag.as_ref().to_owned()).collect();
    let mut ran = vec![];
    for hook in hooks {
        if hook.applies_to(&tags) {
            debug!(hook = hook.name, order = hook.order, "running hook");
            (hook.run)(world);
            ran.push(hook.name);
        }
    }
    ran
}

fn hook_names<W>(hooks: &[Hook<W>]) -> Vec<&'static str> {
    hooks.iter().map(|hook| hook.name).collect()
}

fn bare_tag(tag: &str) -> &str {
    tag.trim().trim_start_matches('@')
}
