//! GraphQL operation documents
//!
//! Fixed documents matching the CMS collection schemas. The tenant field
//! set is shared between the list and by-slug queries.

/// All tenants (paginated by `limit`)
pub const GET_TENANTS: &str = r#"
query getTenants($limit: Int = 100) {
  Tenants(limit: $limit) {
    docs {
      id
      name
      slug
      domain
      menu {
        url
        filename
      }
      logo {
        url
      }
      address
      phone
      email
      heroTitle
      heroSubtitle
      heroDescription
      heroImage {
        url
        filename
      }
      shortAboutTitle
      shortAboutText
      newMenu {
        src {
          url
          filename
        }
        id
      }
    }
    totalDocs
    limit
  }
}
"#;

/// Single tenant by slug
pub const GET_TENANT: &str = r#"
query getTenant($slug: String) {
  Tenants(where: { slug: { equals: $slug } }) {
    docs {
      id
      name
      slug
      domain
      menu {
        url
        filename
      }
      logo {
        url
      }
      address
      phone
      email
      heroTitle
      heroSubtitle
      heroDescription
      heroImage {
        url
        filename
      }
      shortAboutTitle
      shortAboutText
      newMenu {
        src {
          url
          filename
        }
        id
      }
    }
  }
}
"#;

/// Landing-page content singleton
pub const GET_HOME_INFORMATION: &str = r#"
query getHomeInformation {
  HomeInformation {
    CatchPhrase1
    CatchPhrase2
    quote_s_ {
      quote
      id
    }
  }
}
"#;

/// Full gallery collection (no branch filter argument upstream)
pub const GET_GALLERY: &str = r#"
query getGallery {
  Galleries(limit: 100) {
    docs {
      id
      image {
        url
        filename
        alt
      }
      caption
      branch {
        id
        name
        slug
      }
    }
    totalDocs
  }
}
"#;

/// Customer lookup by phone number
pub const GET_CUSTOMER: &str = r#"
query getCustomer($customerPhone: String) {
  Customers(where: { customerPhone: { equals: $customerPhone } }) {
    docs {
      id
      customerName
      customerPhone
    }
  }
}
"#;

/// Create a customer record
pub const CREATE_CUSTOMER: &str = r#"
mutation CreateCustomer($customerName: String!, $customerPhone: String!) {
  createCustomer(
    data: { customerName: $customerName, customerPhone: $customerPhone }
  ) {
    id
    customerName
    customerPhone
  }
}
"#;

/// Create a reservation (status always supplied by the caller)
pub const CREATE_RESERVATION: &str = r#"
mutation CreateReservation(
  $customer: String!
  $reservationDateTime: String!
  $numberOfGuests: Float!
  $specialRequests: String
  $branch: String!
  $status: Reservation_status_MutationInput!
) {
  createReservation(
    data: {
      customer: $customer
      reservationDateTime: $reservationDateTime
      numberOfGuests: $numberOfGuests
      specialRequests: $specialRequests
      branch: $branch
      status: $status
    }
  ) {
    id
    reservationDateTime
    numberOfGuests
  }
}
"#;

/// Create a contact message
pub const CREATE_CONTACT_MESSAGE: &str = r#"
mutation CreateContactMessage(
  $customer: String!
  $message: String
  $branch: String!
  $status: ContactMessage_status_MutationInput!
) {
  createContactMessage(
    data: {
      customer: $customer
      message: $message
      branch: $branch
      status: $status
    }
  ) {
    id
    message
    status
  }
}
"#;
