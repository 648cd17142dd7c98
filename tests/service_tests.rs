use std::sync::Arc;

use vetcare::{
    AddressDraft, Client, ClientDraft, Clinic, MemoryClientStore, MutationOutcome, PetDraft,
};

fn clinic() -> Clinic {
    Clinic::new(Arc::new(MemoryClientStore::new()))
}

fn client_draft(name: &str, lastname: &str) -> ClientDraft {
    ClientDraft {
        name: name.to_string(),
        lastname: lastname.to_string(),
        email: format!("{}@clinic.test", name.to_lowercase()),
        phonenumber: 1_234_567_890,
    }
}

fn pet_draft(name: &str) -> PetDraft {
    PetDraft {
        name: name.to_string(),
        specie: "dog".to_string(),
        breed: None,
        age: 4,
        reason_for_visit: "checkup".to_string(),
    }
}

fn address_draft(street: &str) -> AddressDraft {
    AddressDraft {
        street: street.to_string(),
        state: "Jalisco".to_string(),
        city: "Guadalajara".to_string(),
        cp: 44100,
    }
}

fn expect_applied(outcome: MutationOutcome) -> Client {
    outcome.applied().expect("mutation should have applied")
}

async fn create_with_pet(clinic: &Clinic, name: &str, lastname: &str, pet: &str) -> Client {
    let client = clinic.create_client(client_draft(name, lastname)).await.unwrap();
    expect_applied(
        clinic
            .create_pet(client.id.unwrap(), pet_draft(pet))
            .await
            .unwrap(),
    )
}

#[tokio::test]
async fn every_mutation_on_a_missing_client_is_not_found_and_writes_nothing() {
    let clinic = clinic();
    let existing = clinic
        .create_client(client_draft("Alejandro", "Granados"))
        .await
        .unwrap();

    let missing = existing.id.unwrap() + 100;

    assert!(clinic
        .update_client(missing, client_draft("X", "Y"))
        .await
        .unwrap()
        .is_not_found());
    assert!(clinic.delete_client(missing).await.unwrap().is_not_found());
    assert!(clinic
        .create_pet(missing, pet_draft("Firulais"))
        .await
        .unwrap()
        .is_not_found());
    assert!(clinic
        .update_pet(missing, 1, pet_draft("Firulais"))
        .await
        .unwrap()
        .is_not_found());
    assert!(clinic.delete_pet(missing, 1).await.unwrap().is_not_found());
    assert!(clinic
        .create_address(missing, address_draft("Av. Juarez 10"))
        .await
        .unwrap()
        .is_not_found());
    assert!(clinic
        .update_address(missing, address_draft("Av. Juarez 10"))
        .await
        .unwrap()
        .is_not_found());
    assert!(clinic.delete_address(missing).await.unwrap().is_not_found());

    // Nothing was written along the way.
    let all = clinic.list_clients().await.unwrap();
    assert_eq!(all, vec![existing]);
}

#[tokio::test]
async fn a_pet_of_another_owner_is_not_reachable() {
    let clinic = clinic();
    let owner = create_with_pet(&clinic, "Esteban", "Gonzalez", "Firulais").await;
    let intruder = clinic
        .create_client(client_draft("John", "Lennon"))
        .await
        .unwrap();

    let owned_pet_id = owner.pets[0].id.unwrap();

    assert!(clinic
        .update_pet(intruder.id.unwrap(), owned_pet_id, pet_draft("Stolen"))
        .await
        .unwrap()
        .is_not_found());
    assert!(clinic
        .delete_pet(intruder.id.unwrap(), owned_pet_id)
        .await
        .unwrap()
        .is_not_found());

    // The pet under its real owner is unchanged.
    let owner_now = clinic
        .get_client(owner.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner_now.pets, owner.pets);
}

#[tokio::test]
async fn deleting_one_of_two_pets_leaves_the_other_and_repeats_are_not_found() {
    let clinic = clinic();
    let client = create_with_pet(&clinic, "Esteban", "Gonzalez", "Firulais").await;
    let client_id = client.id.unwrap();

    let client = expect_applied(
        clinic
            .create_pet(client_id, pet_draft("Misifu"))
            .await
            .unwrap(),
    );
    let first_id = client.pets[0].id.unwrap();
    let second_id = client.pets[1].id.unwrap();

    let after = expect_applied(clinic.delete_pet(client_id, second_id).await.unwrap());
    assert_eq!(after.pets.len(), 1);
    assert_eq!(after.pets[0].id, Some(first_id));

    assert!(clinic
        .delete_pet(client_id, second_id)
        .await
        .unwrap()
        .is_not_found());
}

#[tokio::test]
async fn identical_pet_update_leaves_the_collection_content_unchanged() {
    let clinic = clinic();
    let client = create_with_pet(&clinic, "Celia", "Bello", "Misifu").await;
    let client_id = client.id.unwrap();
    let pet_id = client.pets[0].id.unwrap();

    let updated = expect_applied(
        clinic
            .update_pet(client_id, pet_id, pet_draft("Misifu"))
            .await
            .unwrap(),
    );

    assert_eq!(updated.pets, client.pets);
}

#[tokio::test]
async fn new_pets_append_at_the_end_of_the_collection() {
    let clinic = clinic();
    let client = create_with_pet(&clinic, "Hueto", "Navejas", "Firulais").await;

    let client = expect_applied(
        clinic
            .create_pet(client.id.unwrap(), pet_draft("Misifu"))
            .await
            .unwrap(),
    );

    assert_eq!(
        client.pets.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Firulais", "Misifu"]
    );
}

#[tokio::test]
async fn client_update_overwrites_scalars_and_keeps_nested_entities() {
    let clinic = clinic();
    let client = create_with_pet(&clinic, "Alejandro", "Granados", "Firulais").await;
    let client_id = client.id.unwrap();
    expect_applied(
        clinic
            .create_address(client_id, address_draft("Av. Juarez 10"))
            .await
            .unwrap(),
    );

    let updated = expect_applied(
        clinic
            .update_client(client_id, client_draft("Alejandro", "Magana"))
            .await
            .unwrap(),
    );

    assert_eq!(updated.lastname, "Magana");
    assert_eq!(updated.pets.len(), 1);
    assert!(updated.address.is_some());
}

#[tokio::test]
async fn deleting_a_client_returns_its_last_state_and_cascades() {
    let clinic = clinic();
    let client = create_with_pet(&clinic, "Esteban", "Gonzalez", "Firulais").await;
    let client_id = client.id.unwrap();

    let removed = expect_applied(clinic.delete_client(client_id).await.unwrap());
    assert_eq!(removed.pets.len(), 1);

    assert!(clinic.get_client(client_id).await.unwrap().is_none());
    assert!(clinic.search_by_pet_name("Firulais").await.unwrap().is_empty());
}

#[tokio::test]
async fn saving_an_address_over_an_existing_one_replaces_it_wholesale() {
    let clinic = clinic();
    let client = clinic
        .create_client(client_draft("Celia", "Bello"))
        .await
        .unwrap();
    let client_id = client.id.unwrap();

    let first = expect_applied(
        clinic
            .create_address(client_id, address_draft("Av. Juarez 10"))
            .await
            .unwrap(),
    );
    let second = expect_applied(
        clinic
            .create_address(client_id, address_draft("Calle Morelos 22"))
            .await
            .unwrap(),
    );

    let address = second.address.unwrap();
    assert_eq!(address.street, "Calle Morelos 22");
    // A wholesale replacement is a new row, not an edit of the old one.
    assert_ne!(address.id, first.address.unwrap().id);
}

#[tokio::test]
async fn updating_an_address_overwrites_every_field_in_place() {
    let clinic = clinic();
    let client = clinic
        .create_client(client_draft("Hueto", "Navejas"))
        .await
        .unwrap();
    let client_id = client.id.unwrap();

    let created = expect_applied(
        clinic
            .create_address(client_id, address_draft("Av. Juarez 10"))
            .await
            .unwrap(),
    );

    let mut draft = address_draft("Calle Morelos 22");
    draft.city = "Zapopan".to_string();
    draft.cp = 45100;
    let updated = expect_applied(clinic.update_address(client_id, draft).await.unwrap());

    let address = updated.address.unwrap();
    assert_eq!(address.street, "Calle Morelos 22");
    assert_eq!(address.city, "Zapopan");
    assert_eq!(address.cp, 45100);
    // An in-place update keeps the row.
    assert_eq!(address.id, created.address.unwrap().id);
}

#[tokio::test]
async fn updating_an_absent_address_is_not_found() {
    let clinic = clinic();
    let client = clinic
        .create_client(client_draft("John", "Lennon"))
        .await
        .unwrap();

    assert!(clinic
        .update_address(client.id.unwrap(), address_draft("Av. Juarez 10"))
        .await
        .unwrap()
        .is_not_found());
}

#[tokio::test]
async fn deleting_an_address_that_never_existed_is_not_found_every_time() {
    let clinic = clinic();
    let client = clinic
        .create_client(client_draft("John", "Lennon"))
        .await
        .unwrap();
    let client_id = client.id.unwrap();

    assert!(clinic.delete_address(client_id).await.unwrap().is_not_found());
    assert!(clinic.delete_address(client_id).await.unwrap().is_not_found());
}

#[tokio::test]
async fn deleting_an_existing_address_applies_once_then_is_not_found() {
    let clinic = clinic();
    let client = clinic
        .create_client(client_draft("Alejandro", "Granados"))
        .await
        .unwrap();
    let client_id = client.id.unwrap();
    expect_applied(
        clinic
            .create_address(client_id, address_draft("Av. Juarez 10"))
            .await
            .unwrap(),
    );

    let cleared = expect_applied(clinic.delete_address(client_id).await.unwrap());
    assert!(cleared.address.is_none());

    assert!(clinic.delete_address(client_id).await.unwrap().is_not_found());
}
