use std::{cell::Cell, rc::Rc};

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_MILLIS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Handle for raising transient notifications from any page.
/// Outside a [`ToastProvider`] it silently drops everything.
#[derive(Clone, Default)]
pub struct Toaster {
    dispatcher: Option<UseReducerDispatcher<ToastList>>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let Some(dispatcher) = self.dispatcher.clone() else {
            return;
        };
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        dispatcher.dispatch(ToastAction::Push(Toast { id, kind, message }));

        Timeout::new(TOAST_MILLIS, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Renders the top-right toast stack and provides the [`Toaster`] handle.
#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let counter = use_memo((), |_| Rc::new(Cell::new(0u32)));

    let toaster = Toaster {
        dispatcher: Some(list.dispatcher()),
        next_id: (*counter).clone(),
    };

    let dismiss = {
        let dispatcher = list.dispatcher();
        move |id: u32| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
        }
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            <div class="toaster">
                { for list.toasts.iter().map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    html! {
                        <div key={toast.id} {class} onclick={dismiss(toast.id)}>
                            { &toast.message }
                        </div>
                    }
                }) }
            </div>
            { props.children.clone() }
        </ContextProvider<Toaster>>
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_default()
}
