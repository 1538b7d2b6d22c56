pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 注册缓存后端插件
///
/// 在模块加载阶段（ctor）把构造函数写入全局注册表，
/// 启动流程按配置的 cache.type 查找并实例化。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $cache_type:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        let future: $crate::cache::register::BoxedObjectCacheFuture =
                            Box::pin(async {
                                let cache = $cache_type::new()
                                    .map_err($crate::errors::NotifyHubError::cache_connection)?;
                                Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                            });
                        future
                    }),
                );
            }
        }
    };
}
