use std::collections::HashMap;

use bld_model::{Env, EnvVar};
use tracing::{debug, trace};

use super::Whitelist;

/// Merge whitelisted variables from `source` into `output`, without duplicates.
///
/// This is the only path by which user-supplied variables reach the
/// privileged build container. Names outside `whitelist` are dropped.
///
/// - A whitelisted source name that already exists in `output` updates that
///   entry in place when `source_precedence` is `true`, and is left alone
///   otherwise. It is never appended a second time.
/// - Remaining whitelisted source variables are appended in source order.
/// - Output entries without a matching source name are not touched.
///
/// If `source` repeats a whitelisted name, its last occurrence is the one
/// merged; earlier occurrences are dropped.
///
/// `output` is updated in place; the `&mut` borrow gives this call exclusive
/// access to the buffer for its duration.
pub fn merge_trusted_env(
    source: &[EnvVar],
    output: &mut Env,
    source_precedence: bool,
    whitelist: &Whitelist,
) {
    // name -> index of its last whitelisted occurrence in `source`
    let mut last: HashMap<&str, usize> = HashMap::new();
    for (i, var) in source.iter().enumerate() {
        if whitelist.contains(var.name()) {
            last.insert(var.name(), i);
        } else {
            debug!(name = var.name(), "dropping non-whitelisted environment variable");
        }
    }

    let mut consumed = vec![false; source.len()];
    for var in output.iter_mut() {
        let Some(&i) = last.get(var.name()) else {
            continue;
        };
        if source_precedence {
            var.set_value(source[i].value());
        }
        consumed[i] = true;
    }

    let appended = source
        .iter()
        .enumerate()
        .filter(|&(i, var)| !consumed[i] && last.get(var.name()) == Some(&i))
        .map(|(_, var)| var.clone());
    let before = output.len();
    output.extend(appended);

    trace!(
        merged = last.len(),
        appended = output.len() - before,
        source_precedence,
        "trusted environment merged"
    );
}

/// [`merge_trusted_env`] with the process-wide [`Whitelist::global`].
pub fn merge_trusted_env_global(source: &[EnvVar], output: &mut Env, source_precedence: bool) {
    merge_trusted_env(source, output, source_precedence, Whitelist::global());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Vec<EnvVar> {
        pairs.iter().map(|&(k, v)| EnvVar::new(k, v)).collect()
    }

    fn foo_bar() -> Whitelist {
        Whitelist::new(["FOO", "BAR"])
    }

    #[test]
    fn source_precedence_overwrites_in_place() {
        let source = env(&[("FOO", "1"), ("BAZ", "x"), ("BAR", "2")]);
        let mut output = Env::from(env(&[("FOO", "0")]));

        merge_trusted_env(&source, &mut output, true, &foo_bar());

        assert_eq!(output.as_slice(), env(&[("FOO", "1"), ("BAR", "2")]).as_slice());
    }

    #[test]
    fn output_precedence_keeps_existing_values() {
        let source = env(&[("FOO", "1"), ("BAZ", "x"), ("BAR", "2")]);
        let mut output = Env::from(env(&[("FOO", "0")]));

        merge_trusted_env(&source, &mut output, false, &foo_bar());

        assert_eq!(output.as_slice(), env(&[("FOO", "0"), ("BAR", "2")]).as_slice());
    }

    #[test]
    fn non_whitelisted_names_never_cross() {
        let source = env(&[("LD_PRELOAD", "/tmp/x.so"), ("PATH", "/evil")]);
        let mut output = Env::from(env(&[("PATH", "/usr/bin")]));

        merge_trusted_env(&source, &mut output, true, &foo_bar());

        assert_eq!(output.as_slice(), env(&[("PATH", "/usr/bin")]).as_slice());
    }

    #[test]
    fn unmatched_output_entries_are_untouched() {
        let source = env(&[("BAR", "2")]);
        let mut output = Env::from(env(&[("A", "a"), ("FOO", "0"), ("B", "b")]));

        merge_trusted_env(&source, &mut output, true, &foo_bar());

        assert_eq!(
            output.as_slice(),
            env(&[("A", "a"), ("FOO", "0"), ("B", "b"), ("BAR", "2")]).as_slice()
        );
    }

    #[test]
    fn multiple_matches_do_not_shift_positions() {
        // Consuming the first source entry must not shift the second one.
        let source = env(&[("FOO", "1"), ("BAR", "2"), ("X", "3")]);
        let wl = Whitelist::new(["FOO", "BAR", "X"]);
        let mut output = Env::from(env(&[("FOO", "0"), ("BAR", "0")]));

        merge_trusted_env(&source, &mut output, true, &wl);

        assert_eq!(
            output.as_slice(),
            env(&[("FOO", "1"), ("BAR", "2"), ("X", "3")]).as_slice()
        );
    }

    #[test]
    fn matched_in_reverse_order() {
        let source = env(&[("FOO", "1"), ("BAR", "2")]);
        let mut output = Env::from(env(&[("BAR", "0"), ("FOO", "0")]));

        merge_trusted_env(&source, &mut output, true, &foo_bar());

        assert_eq!(output.as_slice(), env(&[("BAR", "2"), ("FOO", "1")]).as_slice());
    }

    #[test]
    fn duplicate_output_names_all_take_source_value() {
        let source = env(&[("FOO", "1")]);
        let mut output = Env::from(env(&[("FOO", "a"), ("FOO", "b")]));

        merge_trusted_env(&source, &mut output, true, &foo_bar());

        assert_eq!(output.as_slice(), env(&[("FOO", "1"), ("FOO", "1")]).as_slice());
    }

    #[test]
    fn duplicate_source_names_last_wins() {
        let source = env(&[("FOO", "1"), ("BAR", "2"), ("FOO", "3")]);

        let mut appended = Env::new();
        merge_trusted_env(&source, &mut appended, true, &foo_bar());
        assert_eq!(appended.as_slice(), env(&[("BAR", "2"), ("FOO", "3")]).as_slice());

        let mut overwritten = Env::from(env(&[("FOO", "0")]));
        merge_trusted_env(&source, &mut overwritten, true, &foo_bar());
        assert_eq!(
            overwritten.as_slice(),
            env(&[("FOO", "3"), ("BAR", "2")]).as_slice()
        );
    }

    #[test]
    fn merge_is_idempotent_with_source_precedence() {
        let source = env(&[("FOO", "1"), ("BAZ", "x"), ("BAR", "2"), ("FOO", "9")]);
        let mut output = Env::from(env(&[("KEEP", "k"), ("BAR", "0")]));

        merge_trusted_env(&source, &mut output, true, &foo_bar());
        let once = output.clone();
        merge_trusted_env(&source, &mut output, true, &foo_bar());

        assert_eq!(output, once);
    }

    #[test]
    fn empty_inputs() {
        let mut output = Env::new();
        merge_trusted_env(&[], &mut output, true, &foo_bar());
        assert!(output.is_empty());

        let mut output = Env::from(env(&[("FOO", "0")]));
        let nothing = Whitelist::new(Vec::<String>::new());
        merge_trusted_env(&env(&[("FOO", "1")]), &mut output, true, &nothing);
        assert_eq!(output.as_slice(), env(&[("FOO", "0")]).as_slice());
    }

    #[test]
    fn global_whitelist_uses_platform_names() {
        let source = env(&[("BUILD_LOGLEVEL", "5"), ("FOO", "1")]);
        let mut output = Env::new();

        merge_trusted_env_global(&source, &mut output, true);

        assert_eq!(output.as_slice(), env(&[("BUILD_LOGLEVEL", "5")]).as_slice());
    }
}
