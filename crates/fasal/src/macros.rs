#[macro_export]
/// Define a Yew callback that clones the listed captures for you.
///
/// Every captured variable is cloned once when the callback is built and once
/// more on each invocation, so the body can move them freely.
///
/// ## With the macro
/// The macro can be used in two forms:
///
/// 1. Ignoring the emitted value:
/// ```compile_fail
/// let on_click = callback!([on_navigate, action] {
///     on_navigate.emit(action.intent());
/// });
/// ```
///
/// 2. Binding the emitted value:
/// ```compile_fail
/// let on_toggle = callback!([accordion] |index: usize| {
///     let mut next = *accordion;
///     next.toggle(index);
///     accordion.set(next);
/// });
/// ```
///
/// ## Without the macro
/// ```compile_fail
/// let on_navigate_clone = on_navigate.clone();
/// let on_click = Callback::from(move |_| {
///     let on_navigate = on_navigate_clone.clone();
///     on_navigate.emit(action.intent());
/// });
/// ```
macro_rules! callback {
    // Version with a bound value
    ([$($var:ident),* $(,)?] |$arg:ident $(: $ty:ty)?| $body:block) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$arg $(: $ty)?| {
                $(let $var = $var.clone();)*
                $body
            })
        }
    };

    // Version without a bound value
    ([$($var:ident),* $(,)?] $body:block) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                $body
            })
        }
    };
}
