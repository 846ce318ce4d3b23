// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_blog_repository;
pub mod postgres_careers_repository;
pub mod postgres_contact_repository;
pub mod postgres_demo_repository;
pub mod postgres_newsletter_repository;
pub mod postgres_partner_repository;
pub mod postgres_team_repository;
pub mod postgres_user_repository;
pub mod postgres_video_repository;

pub use postgres_blog_repository::{
    PostgresAuthorRepository, PostgresBlogPostRepository, PostgresCategoryRepository,
};
pub use postgres_careers_repository::{PostgresDepartmentRepository, PostgresJobRepository};
pub use postgres_contact_repository::PostgresContactRepository;
pub use postgres_demo_repository::{
    PostgresAvailabilitySlotRepository, PostgresDemoInterestRepository,
    PostgresDemoRequestRepository,
};
pub use postgres_newsletter_repository::PostgresNewsletterRepository;
pub use postgres_partner_repository::PostgresPartnerRepository;
pub use postgres_team_repository::{PostgresTeamMemberRepository, PostgresTeamValueRepository};
pub use postgres_user_repository::PostgresUserRepository;
pub use postgres_video_repository::PostgresVideoRepository;
