/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Session state held between login and logout
pub mod auth;
/// Form-encoded transport to the Stream API
pub mod http;
/// Request models: object codes, logical methods and parameters
pub mod requests;
/// Response models: the data envelope and login payload
pub mod responses;
