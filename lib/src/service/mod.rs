pub mod common_structs;
pub mod mock_service;
pub mod watson_service;

use anyhow::Result;

use crate::config::DetectorConfig;


#[derive(Debug, Clone)]
pub struct CommonService {
    pub watson: watson_service::WatsonService,
}

impl CommonService {
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        Ok(Self {
            watson: watson_service::WatsonService::new(config)?,
        })
    }
}
