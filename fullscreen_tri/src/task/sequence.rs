#![allow(non_snake_case)]

use std::marker;

use super::{ContextId, GpuTask};

macro_rules! generate_sequence {
    ($(
        $(#[$doc:meta])*
        ($Sequence:ident, $sequence:ident, <A, $($B:ident),*>),
    )*) => ($(
        $(#[$doc])*
        pub struct $Sequence<A, $($B),*, Ec> {
            id: ContextId,
            a: A,
            $($B: $B,)*
            _marker: marker::PhantomData<fn(&mut Ec)>,
        }

        $(#[$doc])*
        ///
        /// # Panics
        ///
        /// Panics if the sub-tasks are bound to different rendering contexts.
        pub fn $sequence<A, $($B),*, Ec>(a: A, $($B: $B),*) -> $Sequence<A, $($B),*, Ec>
        where
            A: GpuTask<Ec>,
            $($B: GpuTask<Ec>),*
        {
            let mut id = a.context_id();

            $(
                id = match id.combine($B.context_id()) {
                    Ok(id) => id,
                    Err(err) => panic!("{}", err),
                };
            )*

            $Sequence {
                id,
                a,
                $($B,)*
                _marker: marker::PhantomData,
            }
        }

        impl<A, $($B),*, Ec> GpuTask<Ec> for $Sequence<A, $($B),*, Ec>
        where
            A: GpuTask<Ec>,
            $($B: GpuTask<Ec>),*
        {
            type Output = (A::Output, $($B::Output),*);

            fn context_id(&self) -> ContextId {
                self.id
            }

            fn execute(self, execution_context: &mut Ec) -> Self::Output {
                let a = self.a.execute(execution_context);

                $(
                    let $B = self.$B.execute(execution_context);
                )*

                (a, $($B),*)
            }
        }
    )*)
}

generate_sequence! {
    /// Executes 2 tasks in order, outputting a tuple of both outputs.
    (Sequence, sequence, <A, B>),

    /// Executes 3 tasks in order, outputting a tuple of all outputs.
    (Sequence3, sequence3, <A, B, C>),
}
