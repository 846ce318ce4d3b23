// Repository traits (ports)
// Implementations live in the infrastructure layer

pub mod blog_repository;
pub mod careers_repository;
pub mod contact_repository;
pub mod demo_repository;
pub mod newsletter_repository;
pub mod partner_repository;
pub mod team_repository;
pub mod user_repository;
pub mod video_repository;

pub use blog_repository::{AuthorRepository, BlogPostRepository, CategoryRepository};
pub use careers_repository::{DepartmentRepository, JobRepository};
pub use contact_repository::ContactRepository;
pub use demo_repository::{AvailabilitySlotRepository, DemoInterestRepository, DemoRequestRepository};
pub use newsletter_repository::{NewsletterRepository, SubscribeOutcome};
pub use partner_repository::PartnerRepository;
pub use team_repository::{TeamMemberRepository, TeamValueRepository};
pub use user_repository::UserRepository;
pub use video_repository::VideoRepository;
