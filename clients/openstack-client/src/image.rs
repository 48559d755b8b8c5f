// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image service metadata definitions endpoints

use async_trait::async_trait;
use openstack_api::{
    Attributes, CreateMetadefObjectRequest, MetadefObject, MetadefObjectList, MetadefProperty,
    MetadefPropertyList, Namespace,
};
use reqwest::Method;

use crate::ImageApi;
use crate::error::Result;
use crate::http::HttpClient;

const NAMESPACE: &str = "metadef namespace";
const OBJECT: &str = "metadef object";
const PROPERTY: &str = "metadef property";

fn namespace_path(namespace: &str) -> Vec<&str> {
    vec!["v2", "metadefs", "namespaces", namespace]
}

#[async_trait]
impl ImageApi for HttpClient {
    async fn get_namespace(&self, namespace: &str) -> Result<Namespace> {
        let url = self.image_endpoint(&namespace_path(namespace))?;
        self.json(self.request(Method::GET, url), NAMESPACE, namespace)
            .await
    }

    async fn create_object(&self, namespace: &str, name: &str) -> Result<MetadefObject> {
        let mut path = namespace_path(namespace);
        path.push("objects");
        let url = self.image_endpoint(&path)?;
        let body = CreateMetadefObjectRequest {
            name: name.to_string(),
        };

        let mut object: MetadefObject = self
            .json(self.request(Method::POST, url).json(&body), NAMESPACE, namespace)
            .await?;
        object.namespace_name = Some(namespace.to_string());
        Ok(object)
    }

    async fn get_object(&self, name: &str, namespace: &str) -> Result<MetadefObject> {
        let mut path = namespace_path(namespace);
        path.extend(["objects", name]);
        let url = self.image_endpoint(&path)?;

        let mut object: MetadefObject = self
            .json(self.request(Method::GET, url), OBJECT, name)
            .await?;
        object.namespace_name = Some(namespace.to_string());
        Ok(object)
    }

    async fn list_objects(&self, namespace: &str) -> Result<Vec<MetadefObject>> {
        let mut path = namespace_path(namespace);
        path.push("objects");
        let url = self.image_endpoint(&path)?;

        let list: MetadefObjectList = self
            .json(self.request(Method::GET, url), NAMESPACE, namespace)
            .await?;
        Ok(list
            .objects
            .into_iter()
            .map(|mut object| {
                object.namespace_name = Some(namespace.to_string());
                object
            })
            .collect())
    }

    async fn delete_object(&self, name: &str, namespace: &str) -> Result<()> {
        let mut path = namespace_path(namespace);
        path.extend(["objects", name]);
        let url = self.image_endpoint(&path)?;
        self.send(self.request(Method::DELETE, url), OBJECT, name)
            .await?;
        Ok(())
    }

    async fn create_property(
        &self,
        namespace: &str,
        attrs: Attributes,
    ) -> Result<MetadefProperty> {
        let mut path = namespace_path(namespace);
        path.push("properties");
        let url = self.image_endpoint(&path)?;

        let mut property: MetadefProperty = self
            .json(self.request(Method::POST, url).json(&attrs), NAMESPACE, namespace)
            .await?;
        property.namespace_name = Some(namespace.to_string());
        Ok(property)
    }

    async fn get_property(&self, name: &str, namespace: &str) -> Result<MetadefProperty> {
        let mut path = namespace_path(namespace);
        path.extend(["properties", name]);
        let url = self.image_endpoint(&path)?;

        let mut property: MetadefProperty = self
            .json(self.request(Method::GET, url), PROPERTY, name)
            .await?;
        if property.name.is_empty() {
            property.name = name.to_string();
        }
        property.namespace_name = Some(namespace.to_string());
        Ok(property)
    }

    async fn list_properties(&self, namespace: &str) -> Result<Vec<MetadefProperty>> {
        let mut path = namespace_path(namespace);
        path.push("properties");
        let url = self.image_endpoint(&path)?;

        let list: MetadefPropertyList = self
            .json(self.request(Method::GET, url), NAMESPACE, namespace)
            .await?;

        // The catalog keys properties by name and may omit it from the body.
        Ok(list
            .properties
            .into_iter()
            .map(|(name, mut property)| {
                property.name = name;
                property.namespace_name = Some(namespace.to_string());
                property
            })
            .collect())
    }

    async fn update_property(
        &self,
        name: &str,
        namespace: &str,
        attrs: Attributes,
    ) -> Result<MetadefProperty> {
        let mut path = namespace_path(namespace);
        path.extend(["properties", name]);
        let url = self.image_endpoint(&path)?;

        let mut property: MetadefProperty = self
            .json(self.request(Method::PUT, url).json(&attrs), PROPERTY, name)
            .await?;
        property.namespace_name = Some(namespace.to_string());
        Ok(property)
    }

    async fn delete_property(&self, name: &str, namespace: &str) -> Result<()> {
        let mut path = namespace_path(namespace);
        path.extend(["properties", name]);
        let url = self.image_endpoint(&path)?;
        self.send(self.request(Method::DELETE, url), PROPERTY, name)
            .await?;
        Ok(())
    }
}
