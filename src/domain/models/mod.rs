pub mod upcoming_event;
pub mod past_event;
pub mod team_member;
pub mod site_content;
