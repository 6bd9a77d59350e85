//! # roomescape-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, MemberService, ReservationService, ReservationTimeService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ThemeService,
};
