use {
    crate::arity::Arity,
    proc_macro2::TokenStream,
    quote::{format_ident, quote},
    syn::Ident,
};

fn type_params(n: usize) -> Vec<Ident> {
    (0..n).map(|i| format_ident!("T{}", i)).collect()
}

fn bindings(n: usize) -> Vec<Ident> {
    (0..n).map(|i| format_ident!("t{}", i)).collect()
}

pub fn unwrap_impls(arity: Arity) -> TokenStream {
    arity
        .sizes()
        .map(|n| {
            if n == 1 {
                return quote! {
                    impl<T0> crate::unwrap::Unwrap for (T0,) {
                        type Output = T0;

                        #[inline]
                        fn unwrap(self) -> T0 {
                            self.0
                        }
                    }

                    impl<'a, T0> crate::unwrap::Unwrap for &'a (T0,) {
                        type Output = &'a T0;

                        #[inline]
                        fn unwrap(self) -> &'a T0 {
                            &self.0
                        }
                    }

                    impl<'a, T0> crate::unwrap::Unwrap for &'a mut (T0,) {
                        type Output = &'a mut T0;

                        #[inline]
                        fn unwrap(self) -> &'a mut T0 {
                            &mut self.0
                        }
                    }
                };
            }

            let ts = type_params(n);
            quote! {
                impl<#(#ts),*> crate::unwrap::Unwrap for (#(#ts,)*) {
                    type Output = Self;

                    #[inline]
                    fn unwrap(self) -> Self {
                        self
                    }
                }

                impl<'a, #(#ts),*> crate::unwrap::Unwrap for &'a (#(#ts,)*) {
                    type Output = Self;

                    #[inline]
                    fn unwrap(self) -> Self {
                        self
                    }
                }

                impl<'a, #(#ts),*> crate::unwrap::Unwrap for &'a mut (#(#ts,)*) {
                    type Output = Self;

                    #[inline]
                    fn unwrap(self) -> Self {
                        self
                    }
                }
            }
        })
        .collect()
}

/// The owned, shared and unique forms of the argument tuple for one arity, paired with the
/// parameter types the callable receives for each.
fn argument_forms(ts: &[Ident]) -> Vec<(TokenStream, TokenStream, Vec<TokenStream>)> {
    vec![
        (
            quote!(),
            quote!((#(#ts,)*)),
            ts.iter().map(|t| quote!(#t)).collect(),
        ),
        (
            quote!('a,),
            quote!(&'a (#(#ts,)*)),
            ts.iter().map(|t| quote!(&'a #t)).collect(),
        ),
        (
            quote!('a,),
            quote!(&'a mut (#(#ts,)*)),
            ts.iter().map(|t| quote!(&'a mut #t)).collect(),
        ),
    ]
}

pub fn apply_impls(arity: Arity) -> TokenStream {
    arity
        .sizes()
        .flat_map(|n| {
            let ts = type_params(n);
            let vals = bindings(n);
            argument_forms(&ts)
                .into_iter()
                .map(move |(lifetime, args, params)| {
                    let ts = &ts;
                    let vals = &vals;
                    quote! {
                        impl<#lifetime Func, Ret, #(#ts),*> crate::apply::ApplyOnce<#args> for Func
                        where
                            Func: FnOnce(#(#params),*) -> Ret,
                        {
                            type Output = Ret;

                            #[inline]
                            fn apply_once(self, (#(#vals,)*): #args) -> Ret {
                                self(#(#vals),*)
                            }
                        }

                        impl<#lifetime Func, Ret, #(#ts),*> crate::apply::ApplyMut<#args> for Func
                        where
                            Func: FnMut(#(#params),*) -> Ret,
                        {
                            #[inline]
                            fn apply_mut(&mut self, (#(#vals,)*): #args) -> Ret {
                                (*self)(#(#vals),*)
                            }
                        }

                        impl<#lifetime Func, Ret, #(#ts),*> crate::apply::Apply<#args> for Func
                        where
                            Func: Fn(#(#params),*) -> Ret,
                        {
                            #[inline]
                            fn apply(&self, (#(#vals,)*): #args) -> Ret {
                                (*self)(#(#vals),*)
                            }
                        }
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
