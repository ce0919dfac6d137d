//! Per-registry image naming.

use crate::domain::config::ImageRegistry;

/// Constants attached to an image registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub recommended: bool,
    pub network_advice: &'static str,
    /// Repository of the application image; the tag is appended.
    pub app_repository: &'static str,
    /// Fully pinned PostgreSQL image.
    pub database_image: &'static str,
}

impl RegistryProfile {
    pub fn app_image(&self, tag: &str) -> String {
        format!("{}:{}", self.app_repository, tag)
    }
}

pub fn registry_profile(registry: ImageRegistry) -> RegistryProfile {
    match registry {
        ImageRegistry::AliyunAcr => RegistryProfile {
            id: "aliyun-acr",
            name: "阿里云 ACR",
            description: "阿里云容器镜像服务，国内用户推荐",
            recommended: true,
            network_advice: "适合中国大陆用户，提供稳定的镜像加速服务",
            app_repository: "registry.cn-hangzhou.aliyuncs.com/hagicode/hagicode",
            database_image: "registry.cn-hangzhou.aliyuncs.com/hagicode/bitnami_postgresql:16",
        },
        ImageRegistry::DockerHub => RegistryProfile {
            id: "docker-hub",
            name: "Docker Hub",
            description: "Docker official image registry",
            recommended: false,
            network_advice: "Suitable for users with Docker Hub mirror acceleration support",
            app_repository: "newbe36524/hagicode",
            database_image: "bitnami/postgresql:latest",
        },
        ImageRegistry::AzureAcr => RegistryProfile {
            id: "azure-acr",
            name: "Azure Container Registry",
            description: "Alternative image registry, synced with Docker Hub",
            recommended: false,
            network_advice: "Suitable for users who cannot access Docker Hub locally",
            app_repository: "hagicode.azurecr.io/hagicode",
            database_image: "bitnami/postgresql:latest",
        },
    }
}
