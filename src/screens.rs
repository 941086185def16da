//! Screen descriptors for navigator implementations that declare screens
//! one by one instead of receiving a route table.

use serde::Serialize;

use crate::routing::definition::{Options, RouteDefinition};

/// One screen to register with a navigator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenDescriptor {
    pub name: String,
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    #[serde(flatten)]
    pub props: Options,
}

/// Describe each route as a screen, keeping the given order.
pub fn to_screens<'a, I>(routes: I) -> Vec<ScreenDescriptor>
where
    I: IntoIterator<Item = (&'a String, &'a RouteDefinition)>,
{
    routes
        .into_iter()
        .map(|(name, def)| ScreenDescriptor {
            name: name.clone(),
            component: def.screen.clone(),
            options: def.effective_options().cloned(),
            props: def.props.clone(),
        })
        .collect()
}
