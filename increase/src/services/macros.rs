/// Declare a service handle: a borrowed client plus the options layered onto
/// every call made through it.
macro_rules! service_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<'a> {
            client: &'a $crate::Client,
            options: ::increase_core::RequestOptions,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a $crate::Client) -> Self {
                Self {
                    client,
                    options: ::increase_core::RequestOptions::default(),
                }
            }

            /// Layer `options` onto every call made through this handle.
            ///
            /// Members set in `options` override earlier layers; headers accumulate.
            #[must_use]
            pub fn with_options(mut self, options: ::increase_core::RequestOptions) -> Self {
                self.options = self.options.merge(&options);
                self
            }

            /// Options applied to every call made through this handle.
            #[must_use]
            pub const fn options(&self) -> &::increase_core::RequestOptions {
                &self.options
            }
        }
    };
}

/// Generate an async service method that builds a request, executes it with
/// the handle's options, and decodes the response.
///
/// `request` must evaluate to `Result<HttpRequest>` and may only use the
/// method's arguments.
macro_rules! service_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $( $arg:ident : $arg_ty:ty ),* ) -> $ret:ty,
        resource: $resource:ident,
        request: $build:expr $(,)?
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "increase::service",
                skip_all,
                fields(
                    resource = %::increase_types::Resource::$resource,
                    op = stringify!($name),
                ),
            )
        )]
        ///
        /// # Errors
        /// Returns `InvalidArg` when a required id or parameter is missing or
        /// invalid, `Api` for non-2xx responses, and `Transport` or `Timeout`
        /// once retries are spent.
        pub async fn $name(&self, $( $arg: $arg_ty ),*) -> ::increase_core::Result<$ret> {
            let req: ::increase_core::Result<::increase_core::HttpRequest> = $build;
            self.client.execute(req?, &self.options).await
        }
    };
}

/// Generate `list` (one page) and `list_auto_paging` (every item) for a
/// cursor-paginated collection.
macro_rules! list_methods {
    (
        noun: $noun:literal,
        resource: $resource:ident,
        params: $params:ty,
        item: $item:ty $(,)?
    ) => {
        service_method! {
            #[doc = concat!("List one page of ", $noun, ".")]
            ///
            /// Pass `next_cursor` from the returned page back as `cursor` to
            /// fetch the following page.
            method: list(params: &$params) -> ::increase_types::Page<$item>,
            resource: $resource,
            request: $crate::services::list_request(::increase_types::Resource::$resource, params),
        }

        #[doc = concat!("Stream every one of the ", $noun, " matching `params`.")]
        ///
        /// Pages are fetched lazily as the stream is polled. A failed page is
        /// yielded as an error and ends the stream.
        #[must_use]
        pub fn list_auto_paging(
            &self,
            params: $params,
        ) -> ::futures::stream::BoxStream<'static, ::increase_core::Result<$item>> {
            let client = self.client.clone();
            let options = self.options.clone();
            ::increase_core::paginate(params, move |page: $params| {
                let client = client.clone();
                let options = options.clone();
                async move {
                    let req = $crate::services::list_request(
                        ::increase_types::Resource::$resource,
                        &page,
                    )?;
                    client
                        .execute::<::increase_types::Page<$item>>(req, &options)
                        .await
                }
            })
        }
    };
}
